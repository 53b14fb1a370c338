use serde::{Deserialize, Serialize};

/// Tuning for mood analysis and cocktail recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    pub desired_count: usize,         // Cocktails aimed for across all moods
    pub dominant_threshold: f64,      // Minimum score for a mood to be shown as dominant
    pub significant_threshold: f64,   // Minimum score for a mood to get cocktails
    pub tags_per_cocktail: usize,     // Descriptor tags attached to each cocktail
    pub top_artist_limit: usize,      // Artists considered from a playlist
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            desired_count: 3,
            dominant_threshold: 15.0,
            significant_threshold: 5.0,
            tags_per_cocktail: 2,
            top_artist_limit: 5,
        }
    }
}

impl RecommendationSettings {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn load_from_file(path: &str) -> anyhow::Result<RecommendationSettings> {
        let content = std::fs::read_to_string(path)?;
        let settings: RecommendationSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: RecommendationSettings =
            serde_json::from_str(r#"{"desired_count": 5}"#).unwrap();
        assert_eq!(settings.desired_count, 5);
        assert_eq!(settings.dominant_threshold, 15.0);
        assert_eq!(settings.significant_threshold, 5.0);
        assert_eq!(settings.tags_per_cocktail, 2);
        assert_eq!(settings.top_artist_limit, 5);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        assert!(RecommendationSettings::load_from_file("/nonexistent/settings.json").is_err());
    }
}

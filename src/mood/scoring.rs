use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use tracing::debug;

use super::profiles::CharacteristicVector;

/// Mood labels, in their fixed display and tie-breaking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Chill,
    Romantic,
    Dark,
    Sophisticated,
    Intense,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Energetic,
        Mood::Chill,
        Mood::Romantic,
        Mood::Dark,
        Mood::Sophisticated,
        Mood::Intense,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Chill => "chill",
            Mood::Romantic => "romantic",
            Mood::Dark => "dark",
            Mood::Sophisticated => "sophisticated",
            Mood::Intense => "intense",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Un-normalized score in [0, 100] for a characteristic vector
    pub fn raw_score(self, c: &CharacteristicVector) -> f64 {
        let (intensity, danceability, emotionality, aggressiveness, sophistication) = (
            c.intensity(),
            c.danceability(),
            c.emotionality(),
            c.aggressiveness(),
            c.sophistication(),
        );
        let score = match self {
            Mood::Energetic => intensity * 0.5 + danceability * 0.3 + aggressiveness * 0.2,
            Mood::Chill => {
                (1.0 - intensity) * 0.4 + (1.0 - aggressiveness) * 0.3 + emotionality * 0.3
            }
            Mood::Romantic => {
                emotionality * 0.5 + (1.0 - aggressiveness) * 0.3 + sophistication * 0.2
            }
            Mood::Dark => {
                aggressiveness * 0.4 + (1.0 - emotionality) * 0.3 + (1.0 - danceability) * 0.3
            }
            Mood::Sophisticated => {
                sophistication * 0.5 + emotionality * 0.3 + (1.0 - danceability) * 0.2
            }
            Mood::Intense => aggressiveness * 0.4 + intensity * 0.4 + (1.0 - sophistication) * 0.2,
        };
        score * 100.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score per mood; every mood is always present
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoodScores([f64; 6]);

impl MoodScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Mood, f64)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::zero(), |scores, (mood, score)| scores.with(mood, score))
    }

    pub fn with(mut self, mood: Mood, score: f64) -> Self {
        self.0[mood.index()] = score;
        self
    }

    pub fn get(&self, mood: Mood) -> f64 {
        self.0[mood.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mood, f64)> + '_ {
        Mood::ALL.into_iter().map(|mood| (mood, self.get(mood)))
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|score| *score == 0.0)
    }
}

impl Serialize for MoodScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Mood::ALL.len()))?;
        for (mood, score) in self.iter() {
            map.serialize_entry(mood.as_str(), &score)?;
        }
        map.end()
    }
}

/// Mood scoring and ranking functionality
pub struct MoodScoring;

impl MoodScoring {
    /// Display threshold used when a caller has no preference
    pub const DEFAULT_DOMINANT_THRESHOLD: f64 = 15.0;

    /// Normalized mood distribution (percentages with one decimal) for a characteristic vector
    pub fn score(characteristics: &CharacteristicVector) -> MoodScores {
        let raw = MoodScores::from_pairs(
            Mood::ALL
                .into_iter()
                .map(|mood| (mood, mood.raw_score(characteristics))),
        );

        let total = raw.total();
        if total <= 0.0 {
            return MoodScores::zero();
        }

        let normalized = MoodScores::from_pairs(
            raw.iter()
                .map(|(mood, score)| (mood, round_to_tenth(score / total * 100.0))),
        );
        debug!(scores = ?normalized, "calculated mood scores");
        normalized
    }

    /// Moods scoring at least `threshold`, or the two best if none do
    pub fn dominant(scores: &MoodScores, threshold: f64) -> Vec<Mood> {
        let dominant: Vec<Mood> = scores
            .iter()
            .filter(|(_, score)| *score >= threshold)
            .map(|(mood, _)| mood)
            .collect();

        if !dominant.is_empty() {
            return dominant;
        }

        // Stable sort keeps enumeration order among equal scores
        let mut ranked: Vec<(Mood, f64)> = scores.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().take(2).map(|(mood, _)| mood).collect()
    }
}

/// Rounds on the scaled binary value, so exact halves go away from zero
/// (0.25 becomes 0.3 where a correctly rounded decimal would give 0.2)
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

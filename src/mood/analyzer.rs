use serde::Serialize;
use tracing::debug;

use super::aggregator::{CharacteristicAggregator, WeightedGenreGroup};
use super::profiles::CharacteristicVector;
use super::scoring::{Mood, MoodScores, MoodScoring};
use crate::models::TopArtist;

/// Label substituted for artists Spotify knows no genres for
const UNTAGGED_ARTIST_GENRE: &str = "pop";

/// Everything the presentation layer shows about a playlist's mood
#[derive(Debug, Clone, Serialize)]
pub struct MoodAnalysis {
    pub characteristics: CharacteristicVector,
    pub scores: MoodScores,
    pub dominant: Vec<Mood>,
}

/// Main mood analyzer
pub struct MoodAnalyzer {
    dominant_threshold: f64,
}

impl Default for MoodAnalyzer {
    fn default() -> Self {
        Self::new(MoodScoring::DEFAULT_DOMINANT_THRESHOLD)
    }
}

impl MoodAnalyzer {
    pub fn new(dominant_threshold: f64) -> Self {
        Self { dominant_threshold }
    }

    pub fn compute_mood_scores(&self, groups: &[WeightedGenreGroup]) -> MoodScores {
        MoodScoring::score(&CharacteristicAggregator::aggregate(groups))
    }

    pub fn dominant_moods(&self, scores: &MoodScores) -> Vec<Mood> {
        MoodScoring::dominant(scores, self.dominant_threshold)
    }

    pub fn analyze_groups(&self, groups: &[WeightedGenreGroup]) -> MoodAnalysis {
        let characteristics = CharacteristicAggregator::aggregate(groups);
        let scores = MoodScoring::score(&characteristics);
        let dominant = self.dominant_moods(&scores);
        debug!(?dominant, "dominant moods");
        MoodAnalysis {
            characteristics,
            scores,
            dominant,
        }
    }

    /// Analyze a playlist's top artists, weighting each by its share of plays
    pub fn analyze_artists(&self, artists: &[TopArtist]) -> MoodAnalysis {
        if artists.is_empty() {
            let scores = MoodScores::zero();
            return MoodAnalysis {
                characteristics: CharacteristicVector::NEUTRAL,
                dominant: self.dominant_moods(&scores),
                scores,
            };
        }
        self.analyze_groups(&Self::weighted_groups(artists))
    }

    /// Turn top artists into genre groups weighted by play-count share
    pub fn weighted_groups(artists: &[TopArtist]) -> Vec<WeightedGenreGroup> {
        let total_count: u32 = artists.iter().map(|artist| artist.play_count).sum();
        if total_count == 0 {
            return Vec::new();
        }

        artists
            .iter()
            .map(|artist| {
                let weight = f64::from(artist.play_count) / f64::from(total_count);
                if artist.genres.is_empty() {
                    WeightedGenreGroup::new([UNTAGGED_ARTIST_GENRE], weight)
                } else {
                    WeightedGenreGroup::new(artist.genres.iter().cloned(), weight)
                }
            })
            .collect()
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::profiles::CharacteristicVector;
use super::resolver::GenreResolver;

/// Genre labels of one artist together with that artist's prominence in the playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedGenreGroup {
    pub genres: Vec<String>,
    pub weight: f64,
}

impl WeightedGenreGroup {
    pub fn new<S: Into<String>>(genres: impl IntoIterator<Item = S>, weight: f64) -> Self {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            weight,
        }
    }
}

/// Parses `genre, genre:weight`; the weight defaults to 1
impl FromStr for WeightedGenreGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (genres, weight) = match s.rsplit_once(':') {
            Some((genres, weight)) => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid weight '{}' in '{s}'", weight.trim()))?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(format!("weight must be a non-negative number in '{s}'"));
                }
                (genres, weight)
            }
            None => (s, 1.0),
        };

        let genres: Vec<String> = genres
            .split(',')
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect();
        Ok(WeightedGenreGroup { genres, weight })
    }
}

/// Playlist-level characteristic calculation
pub struct CharacteristicAggregator;

impl CharacteristicAggregator {
    /// Weighted average of every listed genre's characteristics.
    ///
    /// Each genre label counts on its own: a group with three labels adds its
    /// weight to the denominator three times.
    pub fn aggregate(groups: &[WeightedGenreGroup]) -> CharacteristicVector {
        let mut total = CharacteristicVector::ZERO;
        let mut total_weight = 0.0;

        for group in groups {
            for genre in &group.genres {
                total += GenreResolver::resolve(genre).scaled(group.weight);
                total_weight += group.weight;
            }
        }

        if total_weight > 0.0 {
            let characteristics = CharacteristicVector(total.0.map(|value| value / total_weight));
            debug!(?characteristics, total_weight, "aggregated playlist characteristics");
            characteristics
        } else {
            CharacteristicVector::NEUTRAL
        }
    }
}

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::cocktails::{CocktailLookup, CocktailSelector};
use crate::error::SourceError;
use crate::models::{CocktailRecord, TopArtist};
use crate::mood::{Mood, MoodAnalysis, MoodAnalyzer, MoodScores, RecommendationSettings};
use crate::spotify::ArtistSource;

/// Result of analyzing one playlist
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub artists: Vec<TopArtist>,
    pub analysis: MoodAnalysis,
    pub cocktails: Vec<CocktailRecord>,
}

/// Fetch a playlist's top artists, infer its mood and pick cocktails for it
pub fn recommend<S, L, R>(
    source: &S,
    lookup: &L,
    rng: &mut R,
    playlist: &str,
    settings: &RecommendationSettings,
) -> Result<Recommendation, SourceError>
where
    S: ArtistSource + ?Sized,
    L: CocktailLookup + ?Sized,
    R: Rng + ?Sized,
{
    let artists = source.top_artists(playlist, settings.top_artist_limit)?;
    info!(artists = artists.len(), "analyzing playlist");

    let analysis = MoodAnalyzer::new(settings.dominant_threshold).analyze_artists(&artists);
    let selector = CocktailSelector::new(lookup, settings);

    let mut cocktails = selector.recommend_cocktails(&analysis.scores, settings.desired_count, rng);
    if cocktails.is_empty() {
        warn!("no cocktails were returned, retrying with an energetic mood");
        let energetic = MoodScores::zero().with(Mood::Energetic, 100.0);
        cocktails = selector.recommend_cocktails(&energetic, 1, rng);
    }
    info!(cocktails = cocktails.len(), "recommendation complete");

    Ok(Recommendation {
        artists,
        analysis,
        cocktails,
    })
}

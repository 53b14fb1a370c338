// End-to-end recommendation scenarios against mocked Spotify and CocktailDB collaborators

use crate::cocktails::MockCocktailLookup;
use crate::error::SourceError;
use crate::models::{CocktailRecord, TopArtist};
use crate::mood::{Mood, RecommendationSettings};
use crate::pipeline::recommend;
use crate::spotify::MockArtistSource;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn artist(name: &str, play_count: u32, genres: &[&str]) -> TopArtist {
        TopArtist {
            name: name.to_string(),
            play_count,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn source_with(artists: Vec<TopArtist>) -> MockArtistSource {
        let mut source = MockArtistSource::new();
        source
            .expect_top_artists()
            .withf(|_, limit| *limit == 5)
            .returning(move |_, _| Ok(artists.clone()));
        source
    }

    fn lookup_all_found() -> MockCocktailLookup {
        let mut lookup = MockCocktailLookup::new();
        lookup
            .expect_lookup_by_name()
            .returning(|name| Some(CocktailRecord::named("1", name)));
        lookup
    }

    #[test]
    fn test_metal_playlist_leans_dark_and_intense() {
        let source = source_with(vec![
            artist("Heavy One", 4, &["metalcore", "hardcore"]),
            artist("Heavy Two", 1, &["death metal"]),
        ]);
        let lookup = lookup_all_found();
        let mut rng = StdRng::seed_from_u64(5);

        let recommendation = recommend(
            &source,
            &lookup,
            &mut rng,
            "https://open.spotify.com/playlist/abc",
            &RecommendationSettings::default(),
        )
        .unwrap();

        let scores = &recommendation.analysis.scores;
        assert_abs_diff_eq!(scores.total(), 100.0, epsilon = 0.2 + 1e-9);
        assert!(scores.get(Mood::Intense) > scores.get(Mood::Chill));
        assert!(recommendation.analysis.dominant.contains(&Mood::Intense));
        assert!(!recommendation.cocktails.is_empty());
        assert_eq!(recommendation.artists.len(), 2);
    }

    #[test]
    fn test_empty_playlist_still_recommends_something() {
        let source = source_with(Vec::new());
        let lookup = lookup_all_found();
        let mut rng = StdRng::seed_from_u64(9);

        let recommendation = recommend(
            &source,
            &lookup,
            &mut rng,
            "abc",
            &RecommendationSettings::default(),
        )
        .unwrap();

        assert!(recommendation.analysis.scores.is_zero());
        assert_eq!(
            recommendation.analysis.dominant,
            vec![Mood::Energetic, Mood::Chill]
        );
        // all-zero scores fall back to the first cocktail mood
        assert!(!recommendation.cocktails.is_empty());
        assert!(recommendation
            .cocktails
            .iter()
            .all(|c| c.mood == Some(Mood::Energetic)));
    }

    #[test]
    fn test_unreachable_cocktail_db_yields_no_cocktails() {
        let source = source_with(vec![artist("Crooner", 3, &["soul"])]);
        let mut lookup = MockCocktailLookup::new();
        lookup.expect_lookup_by_name().returning(|_| None);
        let mut rng = StdRng::seed_from_u64(2);

        let recommendation = recommend(
            &source,
            &lookup,
            &mut rng,
            "abc",
            &RecommendationSettings::default(),
        )
        .unwrap();

        assert!(recommendation.cocktails.is_empty());
        assert_abs_diff_eq!(recommendation.analysis.scores.total(), 100.0, epsilon = 0.2 + 1e-9);
    }

    #[test]
    fn test_source_errors_keep_their_kind() {
        let mut source = MockArtistSource::new();
        source
            .expect_top_artists()
            .returning(|_, _| Err(SourceError::NotFound("playlist abc".to_string())));
        let lookup = MockCocktailLookup::new();
        let mut rng = StdRng::seed_from_u64(0);

        let error = recommend(
            &source,
            &lookup,
            &mut rng,
            "abc",
            &RecommendationSettings::default(),
        )
        .unwrap_err();

        assert!(matches!(error, SourceError::NotFound(_)));
        assert!(error.user_message().contains("playlist not found"));
    }

    #[test]
    fn test_settings_limit_is_passed_to_source() {
        let mut source = MockArtistSource::new();
        source
            .expect_top_artists()
            .withf(|playlist, limit| playlist == "abc" && *limit == 2)
            .times(1)
            .returning(|_, _| Ok(vec![artist("Solo", 1, &["jazz"])]));
        let lookup = lookup_all_found();
        let settings = RecommendationSettings {
            top_artist_limit: 2,
            desired_count: 6,
            ..RecommendationSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(4);

        let recommendation = recommend(&source, &lookup, &mut rng, "abc", &settings).unwrap();
        assert!(recommendation.cocktails.len() >= 2);
    }
}

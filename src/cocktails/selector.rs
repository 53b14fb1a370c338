use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

use super::catalog::{FALLBACK_COCKTAIL, FALLBACK_TAGS, MOOD_POOLS, MoodPool};
use crate::models::CocktailRecord;
use crate::mood::{MoodScores, RecommendationSettings};

/// Cocktail database lookup by exact name
#[cfg_attr(test, automock)]
pub trait CocktailLookup {
    /// `None` when the cocktail is unknown or the lookup failed
    fn lookup_by_name(&self, name: &str) -> Option<CocktailRecord>;
}

/// Weighted random cocktail selection over mood scores
pub struct CocktailSelector<'a, L: CocktailLookup + ?Sized> {
    lookup: &'a L,
    significant_threshold: f64,
    tags_per_cocktail: usize,
}

impl<'a, L: CocktailLookup + ?Sized> CocktailSelector<'a, L> {
    pub fn new(lookup: &'a L, settings: &RecommendationSettings) -> Self {
        Self {
            lookup,
            significant_threshold: settings.significant_threshold,
            tags_per_cocktail: settings.tags_per_cocktail,
        }
    }

    /// Moods with a cocktail pool scoring at least the significance threshold,
    /// or the single best of them when none does
    pub fn significant_moods(&self, scores: &MoodScores) -> Vec<(&'static MoodPool, f64)> {
        let significant: Vec<_> = MOOD_POOLS
            .iter()
            .map(|pool| (pool, scores.get(pool.mood)))
            .filter(|(_, score)| *score >= self.significant_threshold)
            .collect();

        if !significant.is_empty() {
            return significant;
        }

        // Strict comparison keeps the earliest pool on ties
        let mut best = (&MOOD_POOLS[0], scores.get(MOOD_POOLS[0].mood));
        for pool in &MOOD_POOLS[1..] {
            let score = scores.get(pool.mood);
            if score > best.1 {
                best = (pool, score);
            }
        }
        vec![best]
    }

    /// Number of cocktails to draw for a mood, at least one and at most the pool size
    pub fn cocktail_count(desired_count: usize, score: f64, available: usize) -> usize {
        let share = (desired_count as f64 * score / 100.0).round();
        let count = if share > 0.0 { share as usize } else { 0 };
        count.max(1).min(available)
    }

    /// Pick cocktails for the given mood scores, falling back to a default cocktail
    pub fn recommend_cocktails<R: Rng + ?Sized>(
        &self,
        scores: &MoodScores,
        desired_count: usize,
        rng: &mut R,
    ) -> Vec<CocktailRecord> {
        let mut selected = Vec::new();

        for (pool, score) in self.significant_moods(scores) {
            let count = Self::cocktail_count(desired_count, score, pool.cocktails.len());
            let names: Vec<&str> = pool.cocktails.choose_multiple(rng, count).copied().collect();
            debug!(mood = %pool.mood, score, ?names, "selected cocktail candidates");

            for name in names {
                match self.lookup.lookup_by_name(name) {
                    Some(mut cocktail) => {
                        let tag_count = self.tags_per_cocktail.min(pool.tags.len());
                        cocktail.mood = Some(pool.mood);
                        cocktail.mood_tags = pool
                            .tags
                            .choose_multiple(rng, tag_count)
                            .map(|tag| tag.to_string())
                            .collect();
                        selected.push(cocktail);
                    }
                    None => debug!(cocktail = name, "cocktail lookup returned nothing, skipping"),
                }
            }
        }

        if selected.is_empty() {
            warn!("no cocktail could be selected, falling back to {}", FALLBACK_COCKTAIL);
            if let Some(mut cocktail) = self.lookup.lookup_by_name(FALLBACK_COCKTAIL) {
                cocktail.mood_tags = FALLBACK_TAGS.iter().map(|tag| tag.to_string()).collect();
                selected.push(cocktail);
            }
        }

        selected
    }
}

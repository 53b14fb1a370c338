use crate::mood::Mood;

/// Cocktails and descriptor tags offered for one mood
#[derive(Debug, Clone, Copy)]
pub struct MoodPool {
    pub mood: Mood,
    pub cocktails: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// Only these moods lead to cocktails; the remaining ones are analytical
pub const MOOD_POOLS: [MoodPool; 4] = [
    MoodPool {
        mood: Mood::Energetic,
        cocktails: &[
            "Margarita",
            "Mojito",
            "Long Island Iced Tea",
            "Cosmopolitan",
            "Caipirinha",
            "Moscow Mule",
            "Paloma",
            "Gin Fizz",
            "Tequila Sunrise",
        ],
        tags: &["refreshing", "citrus", "fizzy", "bright"],
    },
    MoodPool {
        mood: Mood::Chill,
        cocktails: &[
            "Old Fashioned",
            "Negroni",
            "Manhattan",
            "Whiskey Sour",
            "Mai Tai",
            "Gin and Tonic",
            "Aperol Spritz",
            "Dark 'n' Stormy",
            "Boulevardier",
        ],
        tags: &["smooth", "balanced", "classic", "refined"],
    },
    MoodPool {
        mood: Mood::Romantic,
        cocktails: &[
            "Champagne Cocktail",
            "French 75",
            "Kir Royale",
            "Pink Lady",
            "Rose",
            "Bellini",
            "Aviation",
            "French Martini",
            "Clover Club",
        ],
        tags: &["elegant", "delicate", "floral", "sparkling"],
    },
    MoodPool {
        mood: Mood::Dark,
        cocktails: &[
            "Black Russian",
            "Espresso Martini",
            "Godfather",
            "Blue Moon",
            "Death in the Afternoon",
            "Rusty Nail",
            "Blood and Sand",
            "El Diablo",
            "Jungle Bird",
        ],
        tags: &["bold", "complex", "intense", "mysterious"],
    },
];

/// Looked up when nothing else could be recommended
pub const FALLBACK_COCKTAIL: &str = "Margarita";
pub const FALLBACK_TAGS: [&str; 2] = ["refreshing", "bright"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool_for(mood: Mood) -> Option<&'static MoodPool> {
        MOOD_POOLS.iter().find(|pool| pool.mood == mood)
    }

    #[test]
    fn test_only_four_moods_have_pools() {
        let with_pool: Vec<Mood> = Mood::ALL
            .into_iter()
            .filter(|mood| pool_for(*mood).is_some())
            .collect();
        assert_eq!(
            with_pool,
            vec![Mood::Energetic, Mood::Chill, Mood::Romantic, Mood::Dark]
        );
    }

    #[test]
    fn test_pools_hold_distinct_names() {
        let mut seen = HashSet::new();
        for pool in &MOOD_POOLS {
            assert!(!pool.cocktails.is_empty());
            assert!(!pool.tags.is_empty());
            for name in pool.cocktails {
                assert!(seen.insert(*name), "{name} listed twice");
            }
        }
    }

    #[test]
    fn test_fallback_tags_come_from_energetic_pool() {
        let energetic = pool_for(Mood::Energetic).unwrap();
        assert!(energetic.cocktails.contains(&FALLBACK_COCKTAIL));
        for tag in FALLBACK_TAGS {
            assert!(energetic.tags.contains(&tag));
        }
    }
}

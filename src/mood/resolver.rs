use super::profiles::{
    BaseGenre, CharacteristicVector, DEFAULT_GENRE, GENRE_ALIASES, GENRE_MODIFIERS,
};

/// Genre label resolution using static helper functions
pub struct GenreResolver;

impl GenreResolver {
    /// Find the closest base genre for a free-text genre label
    pub fn base_genre(label: &str) -> BaseGenre {
        let label_lower = label.to_lowercase();

        if let Some(genre) = BaseGenre::from_name(&label_lower) {
            return genre;
        }

        // Base genre named somewhere inside the label, e.g. "pop rock" -> pop
        if let Some(genre) = BaseGenre::ALL
            .into_iter()
            .find(|genre| label_lower.contains(genre.name()))
        {
            return genre;
        }

        GENRE_ALIASES
            .iter()
            .find(|(alias, _)| label_lower.contains(alias))
            .map(|(_, genre)| *genre)
            .unwrap_or(DEFAULT_GENRE)
    }

    /// Characteristic vector for a genre label: base profile plus every matching modifier
    pub fn resolve(label: &str) -> CharacteristicVector {
        let label_lower = label.to_lowercase();
        let base = Self::base_genre(&label_lower).profile();

        GENRE_MODIFIERS
            .iter()
            .filter(|modifier| label_lower.contains(modifier.keyword))
            .fold(base, |vector, modifier| vector.shifted(&modifier.delta))
            .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vector_eq(actual: CharacteristicVector, expected: [f64; 5]) {
        for (a, e) in actual.0.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(a, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_base_genre_exact_match() {
        assert_eq!(GenreResolver::base_genre("pop"), BaseGenre::Pop);
        assert_eq!(GenreResolver::base_genre("JAZZ"), BaseGenre::Jazz);
    }

    #[test]
    fn test_base_genre_substring_match() {
        assert_eq!(GenreResolver::base_genre("pop rock"), BaseGenre::Pop);
        assert_eq!(GenreResolver::base_genre("Nu Metal"), BaseGenre::Metal);
        assert_eq!(GenreResolver::base_genre("chicago blues"), BaseGenre::Blues);
    }

    #[test]
    fn test_base_genre_alias_match() {
        assert_eq!(GenreResolver::base_genre("punk"), BaseGenre::Rock);
        assert_eq!(GenreResolver::base_genre("deep house"), BaseGenre::Electronic);
        assert_eq!(GenreResolver::base_genre("East Coast Hip Hop"), BaseGenre::Rap);
        assert_eq!(GenreResolver::base_genre("contemporary r&b"), BaseGenre::Soul);
        assert_eq!(GenreResolver::base_genre("metalcore"), BaseGenre::Metal);
        assert_eq!(GenreResolver::base_genre("synthwave"), BaseGenre::Electronic);
    }

    #[test]
    fn test_alias_table_order_breaks_ties() {
        // "alt" is listed before "core"
        assert_eq!(GenreResolver::base_genre("alt-core"), BaseGenre::Rock);
    }

    #[test]
    fn test_unknown_genre_defaults_to_pop() {
        assert_eq!(GenreResolver::base_genre("unknown"), BaseGenre::Pop);
        assert_eq!(GenreResolver::base_genre(""), BaseGenre::Pop);
    }

    #[test]
    fn test_resolve_without_modifier() {
        assert_eq!(GenreResolver::resolve("pop").0, [0.8, 0.8, 0.6, 0.5, 0.6]);
    }

    #[test]
    fn test_resolve_with_modifier_clamps() {
        let vector = GenreResolver::resolve("pop dance");
        assert_vector_eq(vector, [0.9, 1.0, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_resolve_stacks_modifiers() {
        // ambient + dark + chill
        let vector = GenreResolver::resolve("Dark Ambient Chill");
        assert_vector_eq(vector, [0.1, 0.0, 1.0, 0.3, 0.9]);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let first = GenreResolver::resolve("progressive psychedelic rock");
        let second = GenreResolver::resolve("progressive psychedelic rock");
        assert_eq!(first.0.map(f64::to_bits), second.0.map(f64::to_bits));
    }
}

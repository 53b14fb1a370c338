use serde::{Deserialize, Serialize};

/// Number of components in a characteristic vector
pub const DIMENSIONS: usize = 5;

/// Musical profile of a genre or a whole playlist, every component in [0, 1]
///
/// Component order: intensity, danceability, emotionality, aggressiveness, sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacteristicVector(pub [f64; DIMENSIONS]);

impl CharacteristicVector {
    /// Used when a playlist carries no weighted genres at all
    pub const NEUTRAL: CharacteristicVector = CharacteristicVector([0.5; DIMENSIONS]);
    pub const ZERO: CharacteristicVector = CharacteristicVector([0.0; DIMENSIONS]);

    pub fn intensity(&self) -> f64 {
        self.0[0]
    }

    pub fn danceability(&self) -> f64 {
        self.0[1]
    }

    pub fn emotionality(&self) -> f64 {
        self.0[2]
    }

    pub fn aggressiveness(&self) -> f64 {
        self.0[3]
    }

    pub fn sophistication(&self) -> f64 {
        self.0[4]
    }

    /// Component-wise addition of a modifier delta (no clamping)
    pub fn shifted(self, delta: &[f64; DIMENSIONS]) -> Self {
        let mut values = self.0;
        for (value, change) in values.iter_mut().zip(delta) {
            *value += change;
        }
        CharacteristicVector(values)
    }

    pub fn scaled(self, factor: f64) -> Self {
        CharacteristicVector(self.0.map(|value| value * factor))
    }

    pub fn clamped(self) -> Self {
        CharacteristicVector(self.0.map(|value| value.clamp(0.0, 1.0)))
    }
}

impl std::ops::AddAssign for CharacteristicVector {
    fn add_assign(&mut self, other: Self) {
        for (value, addend) in self.0.iter_mut().zip(other.0) {
            *value += addend;
        }
    }
}

/// Canonical base genres with a fixed characteristic profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseGenre {
    Pop,
    Rap,
    Rock,
    Electronic,
    Classical,
    Jazz,
    Metal,
    Indie,
    Soul,
    Folk,
    Ambient,
    Latin,
    Blues,
}

impl BaseGenre {
    /// Table order, which is also the substring-matching priority
    pub const ALL: [BaseGenre; 13] = [
        BaseGenre::Pop,
        BaseGenre::Rap,
        BaseGenre::Rock,
        BaseGenre::Electronic,
        BaseGenre::Classical,
        BaseGenre::Jazz,
        BaseGenre::Metal,
        BaseGenre::Indie,
        BaseGenre::Soul,
        BaseGenre::Folk,
        BaseGenre::Ambient,
        BaseGenre::Latin,
        BaseGenre::Blues,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BaseGenre::Pop => "pop",
            BaseGenre::Rap => "rap",
            BaseGenre::Rock => "rock",
            BaseGenre::Electronic => "electronic",
            BaseGenre::Classical => "classical",
            BaseGenre::Jazz => "jazz",
            BaseGenre::Metal => "metal",
            BaseGenre::Indie => "indie",
            BaseGenre::Soul => "soul",
            BaseGenre::Folk => "folk",
            BaseGenre::Ambient => "ambient",
            BaseGenre::Latin => "latin",
            BaseGenre::Blues => "blues",
        }
    }

    /// Capitalized label for display
    pub fn display_name(self) -> &'static str {
        match self {
            BaseGenre::Pop => "Pop",
            BaseGenre::Rap => "Rap",
            BaseGenre::Rock => "Rock",
            BaseGenre::Electronic => "Electronic",
            BaseGenre::Classical => "Classical",
            BaseGenre::Jazz => "Jazz",
            BaseGenre::Metal => "Metal",
            BaseGenre::Indie => "Indie",
            BaseGenre::Soul => "Soul",
            BaseGenre::Folk => "Folk",
            BaseGenre::Ambient => "Ambient",
            BaseGenre::Latin => "Latin",
            BaseGenre::Blues => "Blues",
        }
    }

    /// Exact (already lowercased) name lookup
    pub fn from_name(name: &str) -> Option<BaseGenre> {
        Self::ALL.into_iter().find(|genre| genre.name() == name)
    }

    pub fn profile(self) -> CharacteristicVector {
        let values = match self {
            BaseGenre::Pop => [0.8, 0.8, 0.6, 0.5, 0.6],
            BaseGenre::Rap => [0.8, 0.7, 0.6, 0.7, 0.6],
            BaseGenre::Rock => [0.8, 0.5, 0.7, 0.8, 0.7],
            BaseGenre::Electronic => [0.9, 0.9, 0.4, 0.6, 0.7],
            BaseGenre::Classical => [0.4, 0.2, 0.9, 0.6, 1.0],
            BaseGenre::Jazz => [0.5, 0.5, 0.8, 0.5, 0.9],
            BaseGenre::Metal => [0.9, 0.4, 0.7, 1.0, 0.7],
            BaseGenre::Indie => [0.6, 0.5, 0.8, 0.5, 0.8],
            BaseGenre::Soul => [0.6, 0.6, 0.9, 0.5, 0.8],
            BaseGenre::Folk => [0.4, 0.3, 0.8, 0.4, 0.7],
            BaseGenre::Ambient => [0.3, 0.2, 0.7, 0.3, 0.8],
            BaseGenre::Latin => [0.8, 0.9, 0.7, 0.6, 0.6],
            BaseGenre::Blues => [0.5, 0.4, 0.9, 0.6, 0.8],
        };
        CharacteristicVector(values)
    }
}

/// Keyword that nudges a base profile when it appears anywhere in a genre label
#[derive(Debug, Clone, Copy)]
pub struct GenreModifier {
    pub keyword: &'static str,
    pub delta: [f64; DIMENSIONS],
}

pub const GENRE_MODIFIERS: [GenreModifier; 10] = [
    GenreModifier { keyword: "alternative", delta: [0.0, -0.1, 0.1, 0.1, 0.1] },
    GenreModifier { keyword: "dance", delta: [0.1, 0.3, -0.1, 0.0, -0.1] },
    GenreModifier { keyword: "trap", delta: [0.1, 0.1, -0.2, 0.2, -0.1] },
    GenreModifier { keyword: "hardcore", delta: [0.2, 0.0, 0.0, 0.3, 0.0] },
    GenreModifier { keyword: "progressive", delta: [0.0, -0.1, 0.1, 0.1, 0.2] },
    GenreModifier { keyword: "psychedelic", delta: [-0.1, 0.0, 0.2, 0.0, 0.2] },
    GenreModifier { keyword: "experimental", delta: [-0.1, -0.2, 0.2, 0.1, 0.3] },
    GenreModifier { keyword: "lo-fi", delta: [-0.2, -0.1, 0.1, -0.2, 0.0] },
    GenreModifier { keyword: "dark", delta: [0.0, -0.1, 0.2, 0.2, 0.1] },
    GenreModifier { keyword: "chill", delta: [-0.2, -0.1, 0.1, -0.2, 0.0] },
];

/// Substring aliases tried after the base genre names, first hit wins
pub const GENRE_ALIASES: [(&str, BaseGenre); 10] = [
    ("punk", BaseGenre::Rock),
    ("house", BaseGenre::Electronic),
    ("techno", BaseGenre::Electronic),
    ("edm", BaseGenre::Electronic),
    ("hip hop", BaseGenre::Rap),
    ("r&b", BaseGenre::Soul),
    ("alt", BaseGenre::Rock),
    ("indie", BaseGenre::Rock),
    ("core", BaseGenre::Metal),
    ("wave", BaseGenre::Electronic),
];

/// Fallback for labels nothing else recognises
pub const DEFAULT_GENRE: BaseGenre = BaseGenre::Pop;

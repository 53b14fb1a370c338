use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mood::Mood;

/// An artist from a playlist with the number of tracks they lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopArtist {
    pub name: String,
    pub play_count: u32,
    pub genres: Vec<String>,
}

/// Display details of a Spotify playlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub image: String,
}

/// One ingredient line of a cocktail recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

/// A cocktail from TheCocktailDB, tagged with the mood it was picked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailRecord {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub mood: Option<Mood>,
    pub mood_tags: Vec<String>,
}

/// TheCocktailDB numbers its ingredient columns 1 through 15
const MAX_INGREDIENTS: usize = 15;

impl CocktailRecord {
    /// Minimal record for fakes
    #[cfg(test)]
    pub fn named(id: &str, name: &str) -> Self {
        CocktailRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: None,
            alcoholic: None,
            glass: None,
            instructions: None,
            thumbnail: None,
            ingredients: Vec::new(),
            mood: None,
            mood_tags: Vec::new(),
        }
    }

    /// Build a record from one entry of a `search.php` `drinks` array
    pub fn from_drink(drink: &Map<String, Value>) -> Option<Self> {
        let field = |key: &str| {
            drink
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let name = field("strDrink")?;
        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                field(&format!("strIngredient{i}")).map(|name| Ingredient {
                    name,
                    measure: field(&format!("strMeasure{i}")),
                })
            })
            .collect();

        Some(CocktailRecord {
            id: field("idDrink").unwrap_or_default(),
            name,
            category: field("strCategory"),
            alcoholic: field("strAlcoholic"),
            glass: field("strGlass"),
            instructions: field("strInstructions"),
            thumbnail: field("strDrinkThumb"),
            ingredients,
            mood: None,
            mood_tags: Vec::new(),
        })
    }
}

/// Response structure for TheCocktailDB `search.php`
#[derive(Debug, Deserialize)]
pub struct CocktailSearchResponse {
    pub drinks: Option<Vec<Map<String, Value>>>,
}

/// Response structure for the Spotify client-credentials token call
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

/// Response structure for `GET /v1/playlists/{id}`
#[derive(Debug, Deserialize)]
pub struct PlaylistResponse {
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub images: Option<Vec<PlaylistImage>>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistImage {
    pub url: String,
}

impl From<PlaylistResponse> for PlaylistInfo {
    fn from(response: PlaylistResponse) -> Self {
        PlaylistInfo {
            name: response.name.unwrap_or_default(),
            description: response.description.unwrap_or_default(),
            owner: response
                .owner
                .and_then(|owner| owner.display_name)
                .unwrap_or_default(),
            image: response
                .images
                .and_then(|images| images.into_iter().next())
                .map(|image| image.url)
                .unwrap_or_default(),
        }
    }
}

/// Response structure for `GET /v1/playlists/{id}/tracks`
#[derive(Debug, Deserialize)]
pub struct PlaylistTracksResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub artists: Vec<ArtistReference>,
}

/// Artist as embedded in a track; local files have no id
#[derive(Debug, Deserialize)]
pub struct ArtistReference {
    pub id: Option<String>,
}

/// Response structure for `GET /v1/artists/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct ArtistDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

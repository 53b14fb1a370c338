use tracing::{debug, warn};
use ureq::Agent;
use urlencoding::encode;

use crate::cocktails::CocktailLookup;
use crate::config::Config;
use crate::error::SourceError;
use crate::models::{CocktailRecord, CocktailSearchResponse};

/// TheCocktailDB client searching cocktails by name
pub struct CocktailDbClient {
    agent: Agent,
    base_url: String,
}

impl CocktailDbClient {
    pub fn new(config: &Config) -> Self {
        CocktailDbClient {
            agent: Agent::new(),
            base_url: format!(
                "{}/{}",
                config.cocktaildb_url.trim_end_matches('/'),
                config.cocktaildb_api_key
            ),
        }
    }

    /// Search by name and return the first drink, if any
    pub fn search(&self, name: &str) -> Result<Option<CocktailRecord>, SourceError> {
        let url = format!("{}/search.php?s={}", self.base_url, encode(name));
        debug!(%url, "CocktailDB request");

        let response = self.agent.get(&url).call()?;
        let parsed: CocktailSearchResponse = response
            .into_json()
            .map_err(|e| SourceError::Parse(format!("search for '{name}': {e}")))?;

        Ok(first_drink(parsed))
    }
}

fn first_drink(response: CocktailSearchResponse) -> Option<CocktailRecord> {
    response
        .drinks
        .and_then(|drinks| drinks.into_iter().next())
        .and_then(|drink| CocktailRecord::from_drink(&drink))
}

impl CocktailLookup for CocktailDbClient {
    fn lookup_by_name(&self, name: &str) -> Option<CocktailRecord> {
        match self.search(name) {
            Ok(found) => found,
            Err(e) => {
                warn!("cocktail lookup for '{name}' failed: {e}");
                None
            }
        }
    }
}

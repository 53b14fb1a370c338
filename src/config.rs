use anyhow::{Context, Result};

const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const COCKTAILDB_URL: &str = "https://www.thecocktaildb.com/api/json/v1";
/// TheCocktailDB's public test key
const COCKTAILDB_DEFAULT_KEY: &str = "1";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_accounts_url: String,
    pub cocktaildb_url: String,
    pub cocktaildb_api_key: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    config_from(|key| std::env::var(key).ok())
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let required = |key: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .with_context(|| format!("environment variable {key} is not set"))
    };
    let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    Ok(Config {
        spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
        spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
        spotify_api_url: optional("SPOTIFY_API_URL", SPOTIFY_API_URL),
        spotify_accounts_url: optional("SPOTIFY_ACCOUNTS_URL", SPOTIFY_ACCOUNTS_URL),
        cocktaildb_url: optional("COCKTAILDB_URL", COCKTAILDB_URL),
        cocktaildb_api_key: optional("COCKTAILDB_API_KEY", COCKTAILDB_DEFAULT_KEY),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_fill_optional_keys() {
        let vars = env(&[("SPOTIFY_CLIENT_ID", "id"), ("SPOTIFY_CLIENT_SECRET", "secret")]);
        let config = config_from(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.spotify_client_id, "id");
        assert_eq!(config.spotify_api_url, SPOTIFY_API_URL);
        assert_eq!(config.cocktaildb_api_key, "1");
    }

    #[test]
    fn test_missing_credentials_are_reported() {
        let vars = env(&[("SPOTIFY_CLIENT_ID", "id")]);
        let error = config_from(|key| vars.get(key).cloned()).unwrap_err();
        assert!(error.to_string().contains("SPOTIFY_CLIENT_SECRET"));

        let vars = env(&[("SPOTIFY_CLIENT_ID", ""), ("SPOTIFY_CLIENT_SECRET", "s")]);
        assert!(config_from(|key| vars.get(key).cloned()).is_err());
    }
}

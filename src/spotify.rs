use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use ureq::Agent;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::error::SourceError;
use crate::models::{
    ArtistDetails, PlaylistInfo, PlaylistItem, PlaylistResponse, PlaylistTracksResponse,
    TokenResponse, TopArtist,
};

/// Where a playlist's artists and their genres come from
#[cfg_attr(test, automock)]
pub trait ArtistSource {
    fn playlist_info(&self, playlist: &str) -> Result<PlaylistInfo, SourceError>;

    /// Artists leading the most tracks, most prominent first
    fn top_artists(&self, playlist: &str, limit: usize) -> Result<Vec<TopArtist>, SourceError>;
}

/// Extract the playlist ID from a share URL, URI path or bare ID
pub fn parse_playlist_id(playlist: &str) -> Result<String, SourceError> {
    let last_segment = playlist.trim().trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let id = last_segment.split('?').next().unwrap_or("");
    let id = id.rsplit(':').next().unwrap_or(id);
    if id.is_empty() {
        return Err(SourceError::NotFound(format!(
            "no playlist ID in '{playlist}'"
        )));
    }
    Ok(id.to_string())
}

/// Count tracks per lead artist, ordered by count then first appearance
pub fn rank_lead_artists(items: &[PlaylistItem]) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let lead = item
            .track
            .as_ref()
            .and_then(|track| track.artists.first())
            .and_then(|artist| artist.id.as_deref());
        let Some(artist_id) = lead else {
            continue;
        };

        match positions.get(artist_id) {
            Some(&index) => ranked[index].1 += 1,
            None => {
                positions.insert(artist_id, ranked.len());
                ranked.push((artist_id.to_string(), 1));
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// A small Spotify Web API client using the client-credentials flow
pub struct SpotifyClient {
    agent: Agent,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a client and obtain an access token
    pub fn connect(config: &Config) -> Result<Self, SourceError> {
        let agent = Agent::new();
        let token = Self::request_token(&agent, config)?;
        info!("obtained Spotify access token");

        Ok(SpotifyClient {
            agent,
            api_url: config.spotify_api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn request_token(agent: &Agent, config: &Config) -> Result<String, SourceError> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            config.spotify_client_id, config.spotify_client_secret
        ));
        let url = format!(
            "{}/api/token",
            config.spotify_accounts_url.trim_end_matches('/')
        );

        let response = agent
            .post(&url)
            .set("Authorization", &format!("Basic {credentials}"))
            .send_form(&[("grant_type", "client_credentials")])
            .map_err(|e| match SourceError::from(e) {
                SourceError::Transport(message) => SourceError::Transport(message),
                other => {
                    error!("failed to get Spotify token: {other}");
                    SourceError::Authentication(other.to_string())
                }
            })?;

        let token: TokenResponse = response.into_json()?;
        token
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SourceError::Authentication("token response had no access_token".into()))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.api_url, path);
        debug!(%url, "Spotify request");
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()?;
        response
            .into_json()
            .map_err(|e| SourceError::Parse(format!("{path}: {e}")))
    }

    /// Artist name and genres; failures degrade to an empty record
    fn artist_details(&self, artist_id: &str) -> ArtistDetails {
        match self.get_json::<ArtistDetails>(&format!("artists/{artist_id}")) {
            Ok(details) => details,
            Err(e) => {
                error!("failed to get artist details for {artist_id}: {e}");
                ArtistDetails::default()
            }
        }
    }
}

impl ArtistSource for SpotifyClient {
    fn playlist_info(&self, playlist: &str) -> Result<PlaylistInfo, SourceError> {
        let playlist_id = parse_playlist_id(playlist)?;
        let response: PlaylistResponse = self.get_json(&format!("playlists/{playlist_id}"))?;
        Ok(response.into())
    }

    fn top_artists(&self, playlist: &str, limit: usize) -> Result<Vec<TopArtist>, SourceError> {
        let playlist_id = parse_playlist_id(playlist)?;
        let tracks: PlaylistTracksResponse =
            self.get_json(&format!("playlists/{playlist_id}/tracks"))?;
        debug!(tracks = tracks.items.len(), "fetched playlist tracks");

        let top_artists: Vec<TopArtist> = rank_lead_artists(&tracks.items)
            .into_iter()
            .take(limit)
            .map(|(artist_id, play_count)| {
                let details = self.artist_details(&artist_id);
                TopArtist {
                    name: details.name,
                    play_count,
                    genres: details.genres,
                }
            })
            .collect();

        info!(artists = top_artists.len(), "resolved top artists");
        Ok(top_artists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(json: &str) -> Vec<PlaylistItem> {
        serde_json::from_str::<PlaylistTracksResponse>(json).unwrap().items
    }

    #[test]
    fn test_parse_playlist_id_variants() {
        assert_eq!(
            parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc").unwrap(),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
        assert_eq!(
            parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/").unwrap(),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
        assert_eq!(
            parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap(),
            "37i9dQZF1DXcBWIGoYBM5M"
        );
        assert_eq!(parse_playlist_id("abc123").unwrap(), "abc123");
    }

    #[test]
    fn test_parse_playlist_id_rejects_empty() {
        assert!(matches!(parse_playlist_id(""), Err(SourceError::NotFound(_))));
        assert!(matches!(parse_playlist_id("https://x/?si=1"), Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_rank_lead_artists_counts_first_artist_only() {
        let items = items(
            r#"{"items": [
                {"track": {"artists": [{"id": "artist1", "name": "Artist1"}]}},
                {"track": {"artists": [{"id": "artist2", "name": "Artist2"}, {"id": "artist1", "name": "Artist1"}]}},
                {"track": {"artists": [{"id": "artist1", "name": "Artist1"}]}},
                {"track": null},
                {"track": {"artists": []}},
                {"track": {"artists": [{"id": null, "name": "Local File"}]}}
            ]}"#,
        );
        assert_eq!(
            rank_lead_artists(&items),
            vec![("artist1".to_string(), 2), ("artist2".to_string(), 1)]
        );
    }

    #[test]
    fn test_rank_lead_artists_ties_keep_first_appearance() {
        let items = items(
            r#"{"items": [
                {"track": {"artists": [{"id": "b"}]}},
                {"track": {"artists": [{"id": "a"}]}},
                {"track": {"artists": [{"id": "c"}]}},
                {"track": {"artists": [{"id": "c"}]}}
            ]}"#,
        );
        let ids: Vec<String> = rank_lead_artists(&items).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}

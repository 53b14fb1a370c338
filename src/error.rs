use thiserror::Error;

/// Failures talking to the playlist or cocktail services
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl SourceError {
    /// Map an unsuccessful HTTP status to an error kind
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => SourceError::Authentication(message),
            400 | 404 => SourceError::NotFound(message),
            _ => SourceError::Http { status, message },
        }
    }

    /// Message suitable for showing to the person who asked for a recommendation
    pub fn user_message(&self) -> &'static str {
        match self {
            SourceError::Authentication(_) => {
                "Failed to authenticate with Spotify. Please check the API credentials."
            }
            SourceError::NotFound(_) => {
                "Invalid playlist URL or playlist not found. Please check the URL and try again."
            }
            _ => "An error occurred while analyzing the playlist. Please try again later.",
        }
    }
}

impl From<ureq::Error> for SourceError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                SourceError::from_status(status, body)
            }
            ureq::Error::Transport(transport) => SourceError::Transport(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(error: std::io::Error) -> Self {
        SourceError::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            SourceError::from_status(401, "bad token"),
            SourceError::Authentication(_)
        ));
        assert!(matches!(SourceError::from_status(403, ""), SourceError::Authentication(_)));
        assert!(matches!(SourceError::from_status(404, ""), SourceError::NotFound(_)));
        assert!(matches!(SourceError::from_status(400, ""), SourceError::NotFound(_)));
        assert!(matches!(
            SourceError::from_status(502, ""),
            SourceError::Http { status: 502, .. }
        ));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let auth = SourceError::Authentication(String::new()).user_message();
        let missing = SourceError::NotFound(String::new()).user_message();
        let other = SourceError::Transport(String::new()).user_message();
        assert_ne!(auth, missing);
        assert_ne!(missing, other);
        assert_ne!(auth, other);
    }
}

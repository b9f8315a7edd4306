use reqwest::StatusCode;
use thiserror::Error;

/// Ways a directory lookup can fail. Every variant is recoverable: callers
/// keep whatever records they already hold and surface the failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("directory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The directory answered with a non-success status.
    #[error("directory returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not a JSON array of user objects.
    #[error("malformed directory payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid directory url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl DirectoryError {
    /// Short, single-line description suitable for a status banner.
    pub fn summary(&self) -> String {
        match self {
            DirectoryError::Transport(err) if err.is_timeout() => "request timed out".to_string(),
            DirectoryError::Transport(_) => "network error".to_string(),
            DirectoryError::Status { status, .. } => format!("HTTP {}", status.as_u16()),
            DirectoryError::Decode(_) => "unexpected response format".to_string(),
            DirectoryError::InvalidUrl { .. } => "invalid directory url".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

//! Error types for the vote client

/// Result type alias for vote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the voting backend
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend returned a non-2xx status
    #[error("Vote backend error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Configuration error (from cwconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

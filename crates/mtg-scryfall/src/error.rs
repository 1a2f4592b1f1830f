//! Error types for mtg-scryfall

/// Result type for Scryfall operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to Scryfall
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-success status other than 404
    #[error("Scryfall API error: {status}")]
    Upstream { status: u16 },

    /// Transport failure (connect, TLS, timeout, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("invalid response from Scryfall: {0}")]
    Decode(#[from] serde_json::Error),
}

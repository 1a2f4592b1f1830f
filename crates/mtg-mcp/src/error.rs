//! Error types for the MCP server

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid argument provided
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown resource requested
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Corpus could not be read or written
    #[error(transparent)]
    Corpus(#[from] mtg_corpus::LookupError),

    /// Scryfall client could not be constructed
    #[error(transparent)]
    Scryfall(#[from] mtg_scryfall::Error),

    /// Rules text download failed
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
}

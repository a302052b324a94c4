//! Error types for taste analysis.

use thiserror::Error;

/// Main error type for all MusicScope operations.
#[derive(Debug, Error)]
pub enum MusicScopeError {
    /// Catalog client id or secret is not configured.
    #[error("Spotify credentials are not configured: {0}")]
    MissingCredentials(String),

    /// The credential exchange was rejected or returned no token.
    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    /// The request contained no artist names.
    #[error("Please enter at least one artist!")]
    NoArtistsEntered,

    /// The request contained more artist names than allowed.
    #[error("Please limit your selection to {max} artists maximum (got {given}).")]
    TooManyArtists { max: usize, given: usize },

    /// None of the requested artists could be resolved.
    #[error("Could not find any of the requested artists")]
    NoArtistsResolved,

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Generic API error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for MusicScope operations.
pub type Result<T> = std::result::Result<T, MusicScopeError>;

//! Runtime configuration.
//!
//! Credentials for the live catalog, endpoint overrides, and the tuning knobs
//! of the analysis pipeline. Everything has a sensible default except the
//! credentials, which must come from the environment or the command line.

use std::time::Duration;

use tracing::warn;

use crate::error::{MusicScopeError, Result};

/// Environment variable holding the Spotify client id.
pub const CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";

/// Environment variable holding the Spotify client secret.
pub const CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";

/// Credentials shorter than this are probably truncated copies.
const MIN_CREDENTIAL_LEN: usize = 30;

/// Client-credentials pair for the catalog token endpoint.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &format!("<{} chars>", self.client_id.len()))
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from optional values.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` if either value is absent or blank.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        let client_id = client_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MusicScopeError::MissingCredentials(format!("{} is not set", CLIENT_ID_ENV)))?;
        let client_secret = client_secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                MusicScopeError::MissingCredentials(format!("{} is not set", CLIENT_SECRET_ENV))
            })?;

        if client_id.len() < MIN_CREDENTIAL_LEN {
            warn!("Client ID seems too short, make sure the full value was copied");
        }
        if client_secret.len() < MIN_CREDENTIAL_LEN {
            warn!("Client secret seems too short, make sure the full value was copied");
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::new(
            std::env::var(CLIENT_ID_ENV).ok(),
            std::env::var(CLIENT_SECRET_ENV).ok(),
        )
    }

    /// Get the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

/// Which data source resolves artist names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Built-in lookup table, no network.
    #[default]
    Static,
    /// Live Spotify catalog.
    Live,
}

/// Catalog endpoints, overridable for proxies and tests.
#[derive(Debug, Clone)]
pub struct CatalogEndpoints {
    /// Client-credentials token endpoint.
    pub token_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_base: String,
    /// Optional per-request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            api_base: "https://api.spotify.com/v1".to_string(),
            timeout: None,
        }
    }
}

/// Tuning for the recommendation partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSettings {
    /// Stop collecting candidates once this many are gathered.
    pub target: usize,
    /// Pool size kept after collection; genre search runs while below it.
    pub keep: usize,
    /// Candidates must be strictly more popular than this.
    pub popularity_floor: u8,
    /// Result limit for each genre search query.
    pub genre_search_limit: u32,
}

impl Default for PartitionSettings {
    fn default() -> Self {
        Self {
            target: 20,
            keep: 15,
            popularity_floor: 10,
            genre_search_limit: 20,
        }
    }
}

/// Options for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Number of dominant genres to report (clamped to 1..=5).
    pub dominant_limit: usize,
    /// Recommendation partitioner tuning.
    pub partition: PartitionSettings,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            dominant_limit: 3,
            partition: PartitionSettings::default(),
        }
    }
}

impl AnalysisOptions {
    /// Dominant genre count within its allowed range.
    pub fn dominant_limit(&self) -> usize {
        self.dominant_limit.clamp(1, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_client_id() {
        let err = Credentials::new(None, Some("secret".to_string())).unwrap_err();
        assert!(matches!(err, MusicScopeError::MissingCredentials(_)));
        assert!(err.to_string().contains(CLIENT_ID_ENV));
    }

    #[test]
    fn test_blank_secret_is_missing() {
        let err = Credentials::new(Some("id".to_string()), Some("   ".to_string())).unwrap_err();
        assert!(err.to_string().contains(CLIENT_SECRET_ENV));
    }

    #[test]
    fn test_credentials_trimmed_and_redacted() {
        let creds = Credentials::new(Some(" abc ".to_string()), Some("shh".to_string())).unwrap();
        assert_eq!(creds.client_id(), "abc");
        assert_eq!(creds.client_secret(), "shh");
        assert!(!format!("{:?}", creds).contains("shh"));
    }

    #[test]
    fn test_dominant_limit_clamped() {
        let mut options = AnalysisOptions::default();
        assert_eq!(options.dominant_limit(), 3);
        options.dominant_limit = 9;
        assert_eq!(options.dominant_limit(), 5);
        options.dominant_limit = 0;
        assert_eq!(options.dominant_limit(), 1);
    }
}

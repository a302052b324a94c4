//! Spotify Web API client.
//!
//! Authenticates once with the client-credentials flow and then offers the
//! artist lookups used by the live data source. Responses are not cached.

use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error, info};

use super::CatalogApi;
use crate::config::{CatalogEndpoints, Credentials};
use crate::converters;
use crate::error::{MusicScopeError, Result};
use crate::models::ArtistRecord;

/// Spotify Web API client.
///
/// # Example
///
/// ```rust,no_run
/// use musicscope::{CatalogApi, Credentials, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::from_env()?;
///     let api = SpotifyApi::new(&credentials).await?;
///     if let Some(artist) = api.search_artist("Taylor Swift").await? {
///         println!("{}: {:?}", artist.name, artist.genres);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    endpoints: CatalogEndpoints,
    access_token: String,
}

impl SpotifyApi {
    /// Create a client against the public Spotify endpoints.
    ///
    /// Performs the credential exchange immediately.
    ///
    /// # Errors
    ///
    /// Returns `BadCredentials` if the token endpoint rejects the credentials.
    pub async fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_endpoints(credentials, CatalogEndpoints::default()).await
    }

    /// Create a client against custom endpoints.
    pub async fn with_endpoints(
        credentials: &Credentials,
        endpoints: CatalogEndpoints,
    ) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("musicscope/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = endpoints.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MusicScopeError::ApiError(format!("Failed to create client: {}", e)))?;

        let access_token = Self::request_token(&client, &endpoints.token_url, credentials).await?;
        info!("Spotify API authenticated via client credentials");

        Ok(Self {
            client,
            endpoints,
            access_token,
        })
    }

    /// Exchange the client credentials for a bearer token.
    async fn request_token(
        client: &Client,
        token_url: &str,
        credentials: &Credentials,
    ) -> Result<String> {
        debug!("POST {}", token_url);

        let response = client
            .post(token_url)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token request failed with {}: {}", status, body);
            return Err(MusicScopeError::BadCredentials(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let data: Value = response.json().await?;
        data.get("access_token")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .ok_or_else(|| {
                MusicScopeError::BadCredentials("No access token received from Spotify".to_string())
            })
    }

    /// Make an authenticated GET request with query parameters.
    async fn get_api(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/{}", self.endpoints.api_base, endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await?;

        Self::read_json(endpoint, response).await
    }

    /// Decode a response body, turning catalog error envelopes into errors.
    ///
    /// Error-status bodies are parsed leniently; a malformed success body is a
    /// `ParseError`.
    async fn read_json(endpoint: &str, response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        let data: Value = if status.is_success() {
            serde_json::from_str(&body)?
        } else {
            serde_json::from_str(&body).unwrap_or(Value::Null)
        };

        if let Some(error) = data.get("error") {
            let error_msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            error!("Spotify API error on {}: {}", endpoint, error_msg);
            return Err(MusicScopeError::ApiError(format!("{}: {}", status, error_msg)));
        }
        if !status.is_success() {
            return Err(MusicScopeError::ApiError(format!(
                "{} returned {}",
                endpoint, status
            )));
        }

        Ok(data)
    }
}

impl CatalogApi for SpotifyApi {
    async fn search_artist(&self, name: &str) -> Result<Option<ArtistRecord>> {
        let response = self
            .get_api("search", &[("q", name), ("type", "artist"), ("limit", "1")])
            .await?;

        Ok(converters::parse_search_artists(&response).into_iter().next())
    }

    async fn related_artists(&self, artist_id: &str) -> Result<Vec<ArtistRecord>> {
        let response = self
            .get_api(&format!("artists/{}/related-artists", artist_id), &[])
            .await?;

        Ok(converters::parse_related_artists(&response))
    }

    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<ArtistRecord>> {
        let limit = limit.clamp(1, 50).to_string();
        let response = self
            .get_api("search", &[("q", query), ("type", "artist"), ("limit", limit.as_str())])
            .await?;

        Ok(converters::parse_search_artists(&response))
    }
}

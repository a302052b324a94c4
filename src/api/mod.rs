//! Catalog API clients.
//!
//! This module provides:
//! - [`CatalogApi`]: the lookups the live data source needs from a catalog
//! - [`SpotifyApi`]: the Spotify Web API implementation (client credentials)

use std::future::Future;

use crate::error::Result;
use crate::models::ArtistRecord;

pub mod spotify;

pub use spotify::SpotifyApi;

/// Artist lookups offered by a music catalog.
///
/// Every call is a single request with no retry; callers decide whether a
/// failure is fatal.
pub trait CatalogApi {
    /// Best match for a free-text artist name, or `None` when nothing matches.
    fn search_artist(&self, name: &str) -> impl Future<Output = Result<Option<ArtistRecord>>>;

    /// Artists the catalog considers related to the artist with `artist_id`.
    fn related_artists(&self, artist_id: &str) -> impl Future<Output = Result<Vec<ArtistRecord>>>;

    /// Artists matching a raw search query such as `genre:"dream pop"`.
    fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<ArtistRecord>>>;
}

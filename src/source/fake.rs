//! In-memory catalog used by tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::CatalogApi;
use crate::error::{MusicScopeError, Result};
use crate::models::artist::{normalize_name, ArtistRecord};

/// Catalog backed by hash maps that records every call it receives.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    artists: HashMap<String, ArtistRecord>,
    related: HashMap<String, Vec<ArtistRecord>>,
    searches: HashMap<String, Vec<ArtistRecord>>,
    failing: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_artist(mut self, artist: ArtistRecord) -> Self {
        self.artists.insert(artist.normalized_name(), artist);
        self
    }

    pub fn with_related(mut self, id: &str, related: Vec<ArtistRecord>) -> Self {
        self.related.insert(id.to_string(), related);
        self
    }

    pub fn with_search(mut self, query: &str, results: Vec<ArtistRecord>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    /// Every lookup fails with an API error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.failing {
            return Err(MusicScopeError::ApiError("503 Service Unavailable".to_string()));
        }
        Ok(())
    }
}

impl CatalogApi for FakeCatalog {
    async fn search_artist(&self, name: &str) -> Result<Option<ArtistRecord>> {
        self.record(format!("artist:{}", name))?;
        Ok(self.artists.get(&normalize_name(name)).cloned())
    }

    async fn related_artists(&self, artist_id: &str) -> Result<Vec<ArtistRecord>> {
        self.record(format!("related:{}", artist_id))?;
        Ok(self.related.get(artist_id).cloned().unwrap_or_default())
    }

    async fn search_artists(&self, query: &str, _limit: u32) -> Result<Vec<ArtistRecord>> {
        self.record(format!("search:{}", query))?;
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }
}

/// A resolved input artist with a catalog id.
pub fn seed(name: &str, id: &str) -> ArtistRecord {
    candidate(name, id, 60)
}

/// A catalog artist with a picture and the given popularity.
pub fn candidate(name: &str, id: &str, popularity: u8) -> ArtistRecord {
    ArtistRecord {
        id: Some(id.to_string()),
        name: name.to_string(),
        genres: Vec::new(),
        image_url: format!("https://i.scdn.co/image/{}", id),
        external_url: format!("https://open.spotify.com/artist/{}", id),
        popularity,
    }
}

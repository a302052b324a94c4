//! Artist data sources.
//!
//! An analysis needs two things from its data source: turning a typed name
//! into an [`ArtistRecord`], and proposing recommendations. Two sources exist:
//!
//! - [`StaticTable`]: built-in genre table, no network
//! - [`LiveCatalog`]: any [`CatalogApi`](crate::api::CatalogApi), normally [`SpotifyApi`]
//!
//! [`DataSource`] picks one of them from a [`SourceMode`].

use std::future::Future;

use crate::api::SpotifyApi;
use crate::config::{CatalogEndpoints, Credentials, PartitionSettings, SourceMode};
use crate::error::Result;
use crate::models::{ArtistRecord, Recommendations};

pub mod catalog;
#[cfg(test)]
pub(crate) mod fake;
pub mod table;

pub use catalog::LiveCatalog;
pub use table::StaticTable;

/// Resolves artist names and proposes recommendations.
pub trait ArtistSource {
    /// Resolve one name. `None` means the artist is left out of the analysis.
    fn resolve(&self, name: &str) -> impl Future<Output = Option<ArtistRecord>>;

    /// Recommend artists for the resolved `seeds`.
    ///
    /// `top_genres` are the most frequent raw genre names, most frequent first.
    fn recommend(
        &self,
        seeds: &[ArtistRecord],
        top_genres: &[String],
        settings: &PartitionSettings,
    ) -> impl Future<Output = Recommendations>;
}

/// Data source selected at runtime.
#[derive(Debug, Clone)]
pub enum DataSource {
    Static(StaticTable),
    Live(LiveCatalog<SpotifyApi>),
}

impl DataSource {
    /// Build the source for `mode`.
    ///
    /// The live source needs credentials; they are only read when `mode` is
    /// [`SourceMode::Live`], and a missing value fails before any request is made.
    pub async fn connect<F>(
        mode: SourceMode,
        credentials: F,
        endpoints: CatalogEndpoints,
    ) -> Result<Self>
    where
        F: FnOnce() -> Result<Credentials>,
    {
        match mode {
            SourceMode::Static => Ok(DataSource::Static(StaticTable::new())),
            SourceMode::Live => {
                let credentials = credentials()?;
                let api = SpotifyApi::with_endpoints(&credentials, endpoints).await?;
                Ok(DataSource::Live(LiveCatalog::new(api)))
            }
        }
    }

    /// The mode this source was built for.
    pub fn mode(&self) -> SourceMode {
        match self {
            DataSource::Static(_) => SourceMode::Static,
            DataSource::Live(_) => SourceMode::Live,
        }
    }
}

impl ArtistSource for DataSource {
    async fn resolve(&self, name: &str) -> Option<ArtistRecord> {
        match self {
            DataSource::Static(table) => table.resolve(name).await,
            DataSource::Live(catalog) => catalog.resolve(name).await,
        }
    }

    async fn recommend(
        &self,
        seeds: &[ArtistRecord],
        top_genres: &[String],
        settings: &PartitionSettings,
    ) -> Recommendations {
        match self {
            DataSource::Static(table) => table.recommend(seeds, top_genres, settings).await,
            DataSource::Live(catalog) => catalog.recommend(seeds, top_genres, settings).await,
        }
    }
}

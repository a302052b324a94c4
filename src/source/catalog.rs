//! Live catalog data source.

use tracing::{info, warn};

use super::ArtistSource;
use crate::analysis::recommend::{collect_candidates, partition};
use crate::api::CatalogApi;
use crate::config::PartitionSettings;
use crate::models::{ArtistRecord, Recommendations};

/// Artist source backed by a remote catalog.
///
/// Lookup failures never abort an analysis: an artist that cannot be found
/// or fetched is simply left out.
#[derive(Debug, Clone)]
pub struct LiveCatalog<C> {
    api: C,
}

impl<C: CatalogApi> LiveCatalog<C> {
    /// Wrap a catalog client.
    pub fn new(api: C) -> Self {
        Self { api }
    }

    /// Get the underlying client.
    pub fn api(&self) -> &C {
        &self.api
    }
}

impl<C: CatalogApi> ArtistSource for LiveCatalog<C> {
    async fn resolve(&self, name: &str) -> Option<ArtistRecord> {
        match self.api.search_artist(name.trim()).await {
            Ok(Some(artist)) => Some(artist),
            Ok(None) => {
                info!("No catalog match for {}", name);
                None
            }
            Err(e) => {
                warn!("Search for {} failed: {}", name, e);
                None
            }
        }
    }

    async fn recommend(
        &self,
        seeds: &[ArtistRecord],
        top_genres: &[String],
        settings: &PartitionSettings,
    ) -> Recommendations {
        let candidates = collect_candidates(&self.api, seeds, top_genres, settings).await;
        partition(candidates, settings.keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::{candidate, seed, FakeCatalog};

    #[tokio::test]
    async fn test_resolve_found_and_missing() {
        let catalog = LiveCatalog::new(FakeCatalog::default().with_artist(seed("Grimes", "gr")));

        let found = catalog.resolve(" grimes ").await.unwrap();
        assert_eq!(found.catalog_id(), Some("gr"));
        assert!(catalog.resolve("Nobody").await.is_none());
        assert_eq!(catalog.api().calls(), vec!["artist:grimes", "artist:Nobody"]);
    }

    #[tokio::test]
    async fn test_resolve_error_is_a_miss() {
        let catalog = LiveCatalog::new(FakeCatalog::default().failing());
        assert!(catalog.resolve("Grimes").await.is_none());
    }

    #[tokio::test]
    async fn test_recommend_splits_by_popularity() {
        let related = vec![
            candidate("Crystal Castles", "cc", 62),
            candidate("Purity Ring", "pr", 58),
            candidate("Sky Ferreira", "sf", 65),
            candidate("Austra", "au", 41),
            candidate("Grimes", "gr", 80),
        ];
        let catalog = LiveCatalog::new(FakeCatalog::default().with_related("gr", related));
        let seeds = vec![seed("Grimes", "gr")];

        let recs = catalog
            .recommend(&seeds, &[], &PartitionSettings::default())
            .await;
        let popular: Vec<&str> = recs.popular.iter().map(|a| a.name.as_str()).collect();
        let underrated: Vec<&str> = recs.underrated.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(popular, vec!["Sky Ferreira", "Crystal Castles"]);
        assert_eq!(underrated, vec!["Purity Ring", "Austra"]);
    }
}

//! Taste analysis pipeline.
//!
//! One analysis is a single pass: resolve every requested name, tally genres,
//! classify the taste profile, then ask the data source for recommendations.
//!
//! ```rust,no_run
//! use musicscope::{AnalysisRequest, Analyzer, StaticTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = AnalysisRequest::parse("", "Radiohead, Bon Iver")?;
//!     let result = Analyzer::new(StaticTable::new()).analyze(&request).await?;
//!     println!("{}", result.taste_profile);
//!     Ok(())
//! }
//! ```

use futures_util::future::join_all;
use tracing::{debug, info};

use crate::config::AnalysisOptions;
use crate::error::{MusicScopeError, Result};
use crate::models::{AnalysisResult, ArtistRecord};
use crate::request::AnalysisRequest;
use crate::source::ArtistSource;

pub mod genres;
pub mod recommend;
pub mod taste;

pub use genres::GenreTally;
pub use taste::TasteProfile;

/// Runs analyses against one data source.
#[derive(Debug, Clone)]
pub struct Analyzer<S> {
    source: S,
    options: AnalysisOptions,
}

impl<S: ArtistSource> Analyzer<S> {
    /// Create an analyzer with default options.
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: AnalysisOptions::default(),
        }
    }

    /// Replace the analysis options.
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve all names concurrently. Misses are dropped; input order is kept.
    pub async fn resolve_all(&self, names: &[String]) -> Vec<ArtistRecord> {
        join_all(names.iter().map(|name| self.source.resolve(name)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Analyze a validated request.
    ///
    /// # Errors
    ///
    /// Returns `NoArtistsResolved` if none of the names could be resolved.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        info!("Analyzing {} artists", request.artists().len());

        let artists = self.resolve_all(request.artists()).await;
        if artists.is_empty() {
            return Err(MusicScopeError::NoArtistsResolved);
        }
        debug!(
            "Resolved {}/{} artists",
            artists.len(),
            request.artists().len()
        );

        let tally = GenreTally::from_artists(&artists);
        let dominant_limit = self.options.dominant_limit();
        let profile = TasteProfile::classify(tally.genres());

        let recommendations = self
            .source
            .recommend(&artists, &tally.top(dominant_limit), &self.options.partition)
            .await
            .without(&artists);
        info!(
            "Analysis complete: {} genres, {} recommendations",
            tally.distinct(),
            recommendations.len()
        );

        Ok(AnalysisResult {
            requested_language: request.language().to_string(),
            analyzed_count: artists.len(),
            genre_distribution: tally.distribution(),
            dominant_genres: tally.dominant(dominant_limit),
            taste_profile: profile.to_string(),
            recommended_popular: recommendations.popular,
            recommended_underrated: recommendations.underrated,
            total_genres_found: tally.distinct(),
            artists,
        })
    }
}

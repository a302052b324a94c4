//! # MusicScope
//!
//! A Rust library for analyzing musical taste from a list of favorite artists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use musicscope::{AnalysisRequest, Analyzer, StaticTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = AnalysisRequest::parse("", "Radiohead, Phoebe Bridgers, Drake")?;
//!     let result = Analyzer::new(StaticTable::new()).analyze(&request).await?;
//!
//!     println!("{}", result.taste_profile);
//!     for share in &result.genre_distribution {
//!         println!("{}: {}%", share.genre, share.percentage);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Genre distribution** and dominant genres across your artists
//! - **Taste profile** label
//! - **Recommendations** split into popular and underrated picks
//! - Two data sources: a built-in table (offline) and the Spotify catalog
//!
//! ## Data sources
//!
//! - [`StaticTable`] - built-in genre table, no credentials needed
//! - [`LiveCatalog`] over [`SpotifyApi`] - client-credentials access to Spotify
//! - [`DataSource`] - either of the above, chosen by [`SourceMode`]

pub mod analysis;
pub mod api;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod report;
pub mod request;
pub mod source;

// Main interface (recommended)
pub use analysis::{Analyzer, GenreTally, TasteProfile};
pub use request::{AnalysisRequest, MAX_ARTISTS};

// Data sources and configuration
pub use api::{CatalogApi, SpotifyApi};
pub use config::{AnalysisOptions, CatalogEndpoints, Credentials, PartitionSettings, SourceMode};
pub use error::MusicScopeError;
pub use models::{AnalysisResult, ArtistRecord, GenreShare, Recommendations};
pub use source::{ArtistSource, DataSource, LiveCatalog, StaticTable};

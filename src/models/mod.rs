//! Data models for taste analysis.
//!
//! This module contains the artist record produced by every data source
//! and the aggregate result of one analysis run.

pub mod analysis;
pub mod artist;

// Re-exports for convenience
pub use analysis::{AnalysisResult, GenreShare, Recommendations};
pub use artist::ArtistRecord;

//! Artist record shared by every data source.

use serde::{Deserialize, Serialize};

/// Metadata for one resolved artist.
///
/// Created when a name is resolved (from the static table or the live
/// catalog) and never modified afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistRecord {
    /// Catalog identifier. Absent for static-table records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Artist name.
    pub name: String,

    /// Genres in catalog order.
    #[serde(default)]
    pub genres: Vec<String>,

    /// URL of the artist picture, empty when there is none.
    #[serde(default)]
    pub image_url: String,

    /// Link to the artist page in the catalog, empty when unknown.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub external_url: String,

    /// Catalog popularity score (0-100).
    #[serde(default)]
    pub popularity: u8,
}

impl ArtistRecord {
    /// Create a record with a name and genres only.
    pub fn new<S: Into<String>>(name: S, genres: Vec<String>) -> Self {
        Self {
            name: name.into(),
            genres,
            ..Default::default()
        }
    }

    /// Get the catalog id.
    pub fn catalog_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Name normalized for case-insensitive comparison.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Whether the record has a picture.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Whether any of this artist's genres overlaps `genre`.
    ///
    /// Overlap is a case-insensitive substring match in either direction, so
    /// "indie" overlaps "indie rock" and "modern indie rock" overlaps "indie rock".
    pub fn matches_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genres.iter().any(|g| {
            let g = g.to_lowercase();
            !g.is_empty() && (g.contains(&wanted) || wanted.contains(&g))
        })
    }
}

/// Normalize an artist name for lookups: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

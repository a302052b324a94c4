//! Analysis result models.

use serde::{Deserialize, Serialize};

use super::artist::ArtistRecord;

/// One row of the genre distribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenreShare {
    /// Genre name, capitalized for display.
    pub genre: String,

    /// Number of times the genre was mentioned across resolved artists.
    pub count: usize,

    /// Share of all genre mentions, rounded to a whole percent.
    pub percentage: u32,
}

/// Recommended artists split by popularity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    /// Upper half of the popularity-sorted pool.
    pub popular: Vec<ArtistRecord>,

    /// Lower half of the popularity-sorted pool.
    pub underrated: Vec<ArtistRecord>,
}

impl Recommendations {
    /// Total number of recommended artists.
    pub fn len(&self) -> usize {
        self.popular.len() + self.underrated.len()
    }

    /// Check if there are no recommendations at all.
    pub fn is_empty(&self) -> bool {
        self.popular.is_empty() && self.underrated.is_empty()
    }

    /// Drop every recommendation the user already supplied.
    ///
    /// An artist counts as supplied when its catalog id or its
    /// case-insensitive name matches one of `supplied`.
    pub fn without(mut self, supplied: &[ArtistRecord]) -> Self {
        let is_supplied = |candidate: &ArtistRecord| {
            let name = candidate.normalized_name();
            supplied.iter().any(|s| {
                s.normalized_name() == name
                    || (s.id.is_some() && s.id == candidate.id)
            })
        };
        self.popular.retain(|a| !is_supplied(a));
        self.underrated.retain(|a| !is_supplied(a));
        self
    }
}

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Language the user asked recommendations for ("Any" when unspecified).
    pub requested_language: String,

    /// Number of artists that were successfully resolved.
    pub analyzed_count: usize,

    /// Resolved artists in input order.
    pub artists: Vec<ArtistRecord>,

    /// Genre distribution, most frequent first.
    pub genre_distribution: Vec<GenreShare>,

    /// Most frequent genres, a prefix of `genre_distribution`.
    pub dominant_genres: Vec<String>,

    /// Taste-profile sentence.
    pub taste_profile: String,

    /// Recommended artists from the upper popularity half.
    pub recommended_popular: Vec<ArtistRecord>,

    /// Recommended artists from the lower popularity half.
    pub recommended_underrated: Vec<ArtistRecord>,

    /// Number of distinct genres across resolved artists.
    pub total_genres_found: usize,
}

impl AnalysisResult {
    /// All recommended artists, popular first.
    pub fn recommendations(&self) -> impl Iterator<Item = &ArtistRecord> {
        self.recommended_popular
            .iter()
            .chain(self.recommended_underrated.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(name: &str, id: &str) -> ArtistRecord {
        ArtistRecord {
            id: Some(id.to_string()),
            ..ArtistRecord::new(name, vec![])
        }
    }

    #[test]
    fn test_without_removes_by_name_and_id() {
        let recs = Recommendations {
            popular: vec![
                ArtistRecord::new("RADIOHEAD", vec![]),
                ArtistRecord::new("Big Thief", vec![]),
            ],
            underrated: vec![with_id("Renamed Act", "abc"), with_id("Clairo", "xyz")],
        };
        let supplied = vec![
            ArtistRecord::new("radiohead", vec![]),
            with_id("Original Act", "abc"),
        ];

        let filtered = recs.without(&supplied);
        assert_eq!(filtered.popular.len(), 1);
        assert_eq!(filtered.popular[0].name, "Big Thief");
        assert_eq!(filtered.underrated.len(), 1);
        assert_eq!(filtered.underrated[0].name, "Clairo");
    }

    #[test]
    fn test_without_ignores_missing_ids() {
        let recs = Recommendations {
            popular: vec![ArtistRecord::new("Lorde", vec![])],
            underrated: vec![],
        };
        let supplied = vec![ArtistRecord::new("Drake", vec![])];
        assert_eq!(recs.without(&supplied).len(), 1);
    }
}

//! Recommendation candidate collection and popularity split.
//!
//! Candidates are gathered from an ordered list of sources into a bounded
//! [`CandidatePool`]: related artists of each seed first, then genre searches
//! if the pool is still short. The pool is then split into a popular and an
//! underrated half.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::api::CatalogApi;
use crate::config::PartitionSettings;
use crate::models::{ArtistRecord, Recommendations};

/// Bounded accumulator of recommendation candidates.
///
/// Rejects artists the user supplied, artists without a picture, artists at
/// or below the popularity floor, and duplicates.
#[derive(Debug)]
pub struct CandidatePool {
    capacity: usize,
    popularity_floor: u8,
    excluded_ids: HashSet<String>,
    excluded_names: HashSet<String>,
    seen: HashSet<String>,
    candidates: Vec<ArtistRecord>,
}

impl CandidatePool {
    /// Create an empty pool that excludes every seed artist.
    pub fn new(seeds: &[ArtistRecord], settings: &PartitionSettings) -> Self {
        Self {
            capacity: settings.target,
            popularity_floor: settings.popularity_floor,
            excluded_ids: seeds.iter().filter_map(|s| s.id.clone()).collect(),
            excluded_names: seeds.iter().map(|s| s.normalized_name()).collect(),
            seen: HashSet::new(),
            candidates: Vec::new(),
        }
    }

    fn dedupe_key(candidate: &ArtistRecord) -> String {
        match &candidate.id {
            Some(id) => format!("id:{}", id),
            None => format!("name:{}", candidate.normalized_name()),
        }
    }

    /// Whether `candidate` passes every filter and is not already pooled.
    pub fn accepts(&self, candidate: &ArtistRecord) -> bool {
        if let Some(id) = &candidate.id {
            if self.excluded_ids.contains(id) {
                return false;
            }
        }
        !self.excluded_names.contains(&candidate.normalized_name())
            && candidate.has_image()
            && candidate.popularity > self.popularity_floor
            && !self.seen.contains(&Self::dedupe_key(candidate))
    }

    /// Add `candidate` if there is room and it passes the filters.
    pub fn offer(&mut self, candidate: ArtistRecord) -> bool {
        if self.is_full() || !self.accepts(&candidate) {
            return false;
        }
        self.seen.insert(Self::dedupe_key(&candidate));
        self.candidates.push(candidate);
        true
    }

    /// Offer every candidate in order, stopping when full. Returns how many were added.
    pub fn extend<I: IntoIterator<Item = ArtistRecord>>(&mut self, candidates: I) -> usize {
        let mut added = 0;
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            if self.offer(candidate) {
                added += 1;
            }
        }
        added
    }

    /// Check if the target capacity is reached.
    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.capacity
    }

    /// Number of pooled candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if no candidate has been pooled.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Consume the pool, keeping insertion order.
    pub fn into_candidates(self) -> Vec<ArtistRecord> {
        self.candidates
    }
}

/// Ways of phrasing a genre search, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreQuery {
    /// `genre:"dream pop"`
    Quoted,
    /// `genre:dream-pop`
    Hyphenated,
    /// `dream pop`
    Plain,
}

impl GenreQuery {
    /// All strategies in order of preference.
    pub const ALL: [GenreQuery; 3] = [GenreQuery::Quoted, GenreQuery::Hyphenated, GenreQuery::Plain];

    /// Render the search query for `genre`.
    pub fn format(&self, genre: &str) -> String {
        let genre = genre.trim().to_lowercase();
        match self {
            GenreQuery::Quoted => format!("genre:\"{}\"", genre),
            GenreQuery::Hyphenated => {
                format!("genre:{}", genre.split_whitespace().collect::<Vec<_>>().join("-"))
            }
            GenreQuery::Plain => genre,
        }
    }
}

/// Gather recommendation candidates for `seeds` from the catalog.
///
/// Lookups run one at a time. Failed lookups are logged and contribute nothing.
pub async fn collect_candidates<C: CatalogApi>(
    catalog: &C,
    seeds: &[ArtistRecord],
    top_genres: &[String],
    settings: &PartitionSettings,
) -> Vec<ArtistRecord> {
    let mut pool = CandidatePool::new(seeds, settings);

    for seed in seeds {
        if pool.is_full() {
            break;
        }
        let Some(id) = seed.catalog_id() else {
            continue;
        };
        match catalog.related_artists(id).await {
            Ok(related) => {
                let added = pool.extend(related);
                debug!("{} related candidates from {}", added, seed.name);
            }
            Err(e) => warn!("Could not fetch related artists for {}: {}", seed.name, e),
        }
    }

    if pool.len() < settings.keep {
        for genre in top_genres {
            if pool.is_full() {
                break;
            }
            let matches = search_genre(catalog, genre, &pool, settings).await;
            let added = pool.extend(matches);
            debug!("{} genre candidates for {}", added, genre);
        }
    }

    pool.into_candidates()
}

/// Try each [`GenreQuery`] in order and return the first non-empty filtered result.
async fn search_genre<C: CatalogApi>(
    catalog: &C,
    genre: &str,
    pool: &CandidatePool,
    settings: &PartitionSettings,
) -> Vec<ArtistRecord> {
    for strategy in GenreQuery::ALL {
        let query = strategy.format(genre);
        let results = match catalog.search_artists(&query, settings.genre_search_limit).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Genre search '{}' failed: {}", query, e);
                continue;
            }
        };

        let filtered: Vec<ArtistRecord> = results
            .into_iter()
            .filter(|a| a.matches_genre(genre) && pool.accepts(a))
            .collect();
        if !filtered.is_empty() {
            return filtered;
        }
    }
    Vec::new()
}

/// Split candidates into popular and underrated halves.
///
/// Keeps the first `keep` candidates, sorts them by popularity (highest
/// first, ties in collection order) and gives the popular half the extra
/// element when the count is odd.
pub fn partition(mut candidates: Vec<ArtistRecord>, keep: usize) -> Recommendations {
    candidates.truncate(keep);
    candidates.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    let split = candidates.len().div_ceil(2);
    let underrated = candidates.split_off(split);
    Recommendations {
        popular: candidates,
        underrated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::{candidate, seed, FakeCatalog};

    fn settings() -> PartitionSettings {
        PartitionSettings::default()
    }

    #[test]
    fn test_pool_rejects_seeds_and_filters() {
        let seeds = vec![seed("Radiohead", "rh")];
        let mut pool = CandidatePool::new(&seeds, &settings());

        assert!(!pool.offer(candidate("radiohead", "other-id", 80)));
        assert!(!pool.offer(candidate("Renamed", "rh", 80)));
        assert!(!pool.offer(candidate("Obscure", "o1", 10)));
        let mut faceless = candidate("Faceless", "f1", 50);
        faceless.image_url.clear();
        assert!(!pool.offer(faceless));

        assert!(pool.offer(candidate("Portishead", "ph", 70)));
        assert!(!pool.offer(candidate("Portishead again", "ph", 70)));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_pool_stops_at_capacity() {
        let settings = PartitionSettings {
            target: 2,
            ..PartitionSettings::default()
        };
        let mut pool = CandidatePool::new(&[], &settings);
        let added = pool.extend((0..5).map(|i| candidate(&format!("A{}", i), &i.to_string(), 50)));
        assert_eq!(added, 2);
        assert!(pool.is_full());
    }

    #[test]
    fn test_genre_query_formats() {
        assert_eq!(GenreQuery::Quoted.format("Dream Pop"), "genre:\"dream pop\"");
        assert_eq!(GenreQuery::Hyphenated.format("dream  pop"), "genre:dream-pop");
        assert_eq!(GenreQuery::Plain.format(" dream pop "), "dream pop");
    }

    #[test]
    fn test_partition_odd_count() {
        let candidates = vec![
            candidate("Low", "1", 20),
            candidate("High", "2", 90),
            candidate("Mid", "3", 50),
        ];
        let recs = partition(candidates, 15);
        let popular: Vec<&str> = recs.popular.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(popular, vec!["High", "Mid"]);
        assert_eq!(recs.underrated[0].name, "Low");
    }

    #[test]
    fn test_partition_truncates_before_sorting() {
        let mut candidates: Vec<ArtistRecord> = (0..15)
            .map(|i| candidate(&format!("A{}", i), &i.to_string(), 30))
            .collect();
        candidates.push(candidate("Late Star", "late", 99));

        let recs = partition(candidates, 15);
        assert_eq!(recs.len(), 15);
        assert!(recs.popular.iter().all(|a| a.name != "Late Star"));
        assert_eq!(recs.popular.len(), 8);
        assert_eq!(recs.underrated.len(), 7);
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(Vec::new(), 15).is_empty());
    }

    #[tokio::test]
    async fn test_related_artists_fill_pool() {
        let seeds = vec![seed("Radiohead", "rh")];
        let related: Vec<ArtistRecord> = (0..25)
            .map(|i| candidate(&format!("Related {}", i), &format!("r{}", i), 40 + i as u8))
            .collect();
        let catalog = FakeCatalog::default().with_related("rh", related);

        let pool = collect_candidates(&catalog, &seeds, &["rock".to_string()], &settings()).await;
        assert_eq!(pool.len(), 20);
        assert!(catalog.calls().iter().all(|c| !c.starts_with("search:")));
    }

    #[tokio::test]
    async fn test_genre_search_falls_through_strategies() {
        let seeds = vec![seed("Beach House", "bh")];
        let catalog = FakeCatalog::default()
            .with_search(
                "genre:\"dream pop\"",
                vec![candidate_with_genres("Off Topic", "x", 60, &["metal"])],
            )
            .with_search(
                "genre:dream-pop",
                vec![
                    candidate_with_genres("Cocteau Twins", "ct", 55, &["Dream Pop"]),
                    candidate_with_genres("Beach House", "bh", 80, &["dream pop"]),
                ],
            )
            .with_search(
                "dream pop",
                vec![candidate_with_genres("Never Asked", "na", 70, &["dream pop"])],
            );

        let pool =
            collect_candidates(&catalog, &seeds, &["dream pop".to_string()], &settings()).await;
        let names: Vec<&str> = pool.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cocteau Twins"]);
        assert!(!catalog.calls().contains(&"search:dream pop".to_string()));
    }

    #[tokio::test]
    async fn test_failed_lookups_are_skipped() {
        let seeds = vec![seed("Radiohead", "rh")];
        let catalog = FakeCatalog::default().failing();
        let pool = collect_candidates(&catalog, &seeds, &["rock".to_string()], &settings()).await;
        assert!(pool.is_empty());
    }

    #[tokio::test]
    async fn test_dedupes_across_sources() {
        let seeds = vec![seed("Radiohead", "rh")];
        let catalog = FakeCatalog::default()
            .with_related("rh", vec![candidate_with_genres("Portishead", "ph", 70, &["trip hop"])])
            .with_search(
                "genre:\"trip hop\"",
                vec![
                    candidate_with_genres("Portishead", "ph", 70, &["trip hop"]),
                    candidate_with_genres("Massive Attack", "ma", 72, &["trip hop"]),
                ],
            );

        let pool =
            collect_candidates(&catalog, &seeds, &["trip hop".to_string()], &settings()).await;
        let names: Vec<&str> = pool.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Portishead", "Massive Attack"]);
    }

    fn candidate_with_genres(name: &str, id: &str, popularity: u8, genres: &[&str]) -> ArtistRecord {
        ArtistRecord {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..candidate(name, id, popularity)
        }
    }
}

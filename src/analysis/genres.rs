//! Genre tallying and distribution.

use std::collections::HashMap;

use crate::models::{ArtistRecord, GenreShare};

/// Genre occurrence counts in first-discovery order.
#[derive(Debug, Clone, Default)]
pub struct GenreTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    mentions: usize,
}

impl GenreTally {
    /// Tally every genre of every artist.
    pub fn from_artists(artists: &[ArtistRecord]) -> Self {
        let mut tally = Self::default();
        for genre in artists.iter().flat_map(|a| a.genres.iter()) {
            tally.add(genre);
        }
        tally
    }

    /// Count one mention of `genre`.
    pub fn add(&mut self, genre: &str) {
        self.mentions += 1;
        match self.index.get(genre) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(genre.to_string(), self.counts.len());
                self.counts.push((genre.to_string(), 1));
            }
        }
    }

    /// Total genre mentions (not distinct genres).
    pub fn total_mentions(&self) -> usize {
        self.mentions
    }

    /// Number of distinct genres.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Distinct genres in discovery order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(g, _)| g.as_str())
    }

    /// Genres with counts, most frequent first. Ties keep discovery order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(g, c)| (g.as_str(), *c)).collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Full distribution with display names and rounded percentages.
    pub fn distribution(&self) -> Vec<GenreShare> {
        let total = self.mentions.max(1) as f64;
        self.ranked()
            .into_iter()
            .map(|(genre, count)| GenreShare {
                genre: capitalize(genre),
                count,
                percentage: ((count as f64 / total) * 100.0).round() as u32,
            })
            .collect()
    }

    /// The `n` most frequent genres, unmodified.
    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(g, _)| g.to_string())
            .collect()
    }

    /// The `n` most frequent genres, capitalized for display.
    pub fn dominant(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(g, _)| capitalize(g))
            .collect()
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

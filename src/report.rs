//! Text and JSON rendering of analysis results.

use std::fmt;

use crate::error::Result;
use crate::models::{AnalysisResult, ArtistRecord};

/// Width of a 100% bar in the genre chart.
const BAR_WIDTH: usize = 30;

/// Render a result as pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH).div_ceil(100);
    "█".repeat(filled)
}

fn write_artist(f: &mut fmt::Formatter<'_>, artist: &ArtistRecord) -> fmt::Result {
    write!(f, "  - {}", artist.name)?;
    if artist.popularity > 0 {
        write!(f, " (popularity {})", artist.popularity)?;
    }
    if !artist.external_url.is_empty() {
        write!(f, " {}", artist.external_url)?;
    }
    writeln!(f)
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.taste_profile)?;
        writeln!(f)?;
        writeln!(
            f,
            "Artists analyzed: {}  |  Genres found: {}  |  Language: {}",
            self.analyzed_count, self.total_genres_found, self.requested_language
        )?;

        writeln!(f)?;
        writeln!(f, "Your artists")?;
        for artist in &self.artists {
            writeln!(f, "  - {} [{}]", artist.name, artist.genres.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Dominant genres: {}", self.dominant_genres.join(", "))?;

        writeln!(f)?;
        writeln!(f, "Genre distribution")?;
        let width = self
            .genre_distribution
            .iter()
            .map(|s| s.genre.chars().count())
            .max()
            .unwrap_or(0);
        for share in &self.genre_distribution {
            writeln!(
                f,
                "  {:<width$}  {:>3}%  {}",
                share.genre,
                share.percentage,
                bar(share.percentage),
                width = width
            )?;
        }

        if !self.recommended_popular.is_empty() {
            writeln!(f)?;
            writeln!(f, "Popular recommendations")?;
            for artist in &self.recommended_popular {
                write_artist(f, artist)?;
            }
        }
        if !self.recommended_underrated.is_empty() {
            writeln!(f)?;
            writeln!(f, "Underrated recommendations")?;
            for artist in &self.recommended_underrated {
                write_artist(f, artist)?;
            }
        }
        Ok(())
    }
}

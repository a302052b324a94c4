//! Taste-profile classification.

use std::fmt;

const EXPERIMENTAL: &[&str] = &["experimental", "ambient", "electronic"];
const INDIE: &[&str] = &["indie", "alternative", "folk"];
const MAINSTREAM: &[&str] = &["pop", "rock", "hip-hop"];

/// Qualitative label for a set of genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasteProfile {
    ExperimentalExplorer,
    IndieConnoisseur,
    CulturalConnector,
    EclecticCurator,
}

impl TasteProfile {
    /// Classify a flattened genre list. First matching rule wins:
    ///
    /// 1. any experimental genre
    /// 2. indie genres without mainstream ones
    /// 3. any mainstream genre
    /// 4. everything else
    pub fn classify<'a, I>(genres: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let genres: Vec<String> = genres.into_iter().map(|g| g.to_lowercase()).collect();
        let has_any = |set: &[&str]| genres.iter().any(|g| set.contains(&g.as_str()));

        let experimental = has_any(EXPERIMENTAL);
        let indie = has_any(INDIE);
        let mainstream = has_any(MAINSTREAM);

        if experimental {
            TasteProfile::ExperimentalExplorer
        } else if indie && !mainstream {
            TasteProfile::IndieConnoisseur
        } else if mainstream {
            TasteProfile::CulturalConnector
        } else {
            TasteProfile::EclecticCurator
        }
    }

    /// Short label, e.g. "Experimental Explorer".
    pub fn label(&self) -> &'static str {
        match self {
            TasteProfile::ExperimentalExplorer => "Experimental Explorer",
            TasteProfile::IndieConnoisseur => "Indie Connoisseur",
            TasteProfile::CulturalConnector => "Cultural Connector",
            TasteProfile::EclecticCurator => "Eclectic Curator",
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            TasteProfile::ExperimentalExplorer => "🔬",
            TasteProfile::IndieConnoisseur => "🎸",
            TasteProfile::CulturalConnector => "🌟",
            TasteProfile::EclecticCurator => "🎵",
        }
    }

    /// One-sentence description of the profile.
    pub fn description(&self) -> &'static str {
        match self {
            TasteProfile::ExperimentalExplorer => {
                "You actively seek boundary-pushing, avant-garde music!"
            }
            TasteProfile::IndieConnoisseur => {
                "You have refined taste for independent, alternative music!"
            }
            TasteProfile::CulturalConnector => {
                "You appreciate widely-loved, influential music!"
            }
            TasteProfile::EclecticCurator => "You have beautifully diverse musical taste!",
        }
    }
}

impl fmt::Display for TasteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.emoji(),
            self.label().to_uppercase(),
            self.description()
        )
    }
}

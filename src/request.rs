//! Validated analysis requests.

use serde::{Deserialize, Serialize};

use crate::error::{MusicScopeError, Result};

/// Maximum number of artists accepted in one request.
pub const MAX_ARTISTS: usize = 20;

/// Language reported when the user did not pick one.
pub const ANY_LANGUAGE: &str = "Any";

/// A checked list of artist names plus the preferred language.
///
/// Deserialization goes through [`AnalysisRequest::new`], so a decoded
/// request obeys the same limits as one built in code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawRequest")]
pub struct AnalysisRequest {
    language: String,
    artists: Vec<String>,
}

impl AnalysisRequest {
    /// Build a request from individual names.
    ///
    /// Names are trimmed and blank entries dropped before counting.
    ///
    /// # Errors
    ///
    /// - `NoArtistsEntered` if nothing is left after trimming
    /// - `TooManyArtists` if more than [`MAX_ARTISTS`] names remain
    pub fn new<I, S>(language: &str, artists: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let artists: Vec<String> = artists
            .into_iter()
            .map(|a| a.as_ref().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        if artists.is_empty() {
            return Err(MusicScopeError::NoArtistsEntered);
        }
        if artists.len() > MAX_ARTISTS {
            return Err(MusicScopeError::TooManyArtists {
                max: MAX_ARTISTS,
                given: artists.len(),
            });
        }

        let language = match language.trim() {
            "" => ANY_LANGUAGE.to_string(),
            other => other.to_string(),
        };

        Ok(Self { language, artists })
    }

    /// Build a request from a comma-separated list such as `"Radiohead, Drake"`.
    pub fn parse(language: &str, input: &str) -> Result<Self> {
        Self::new(language, input.split(','))
    }

    /// Preferred language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Artist names in input order.
    pub fn artists(&self) -> &[String] {
        &self.artists
    }
}

/// Unchecked wire form of [`AnalysisRequest`].
#[derive(Deserialize)]
struct RawRequest {
    #[serde(default)]
    language: String,
    artists: Vec<String>,
}

impl TryFrom<RawRequest> for AnalysisRequest {
    type Error = MusicScopeError;

    fn try_from(raw: RawRequest) -> Result<Self> {
        Self::new(&raw.language, raw.artists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let request = AnalysisRequest::parse("", " Radiohead ,, Drake ,  ").unwrap();
        assert_eq!(request.artists(), &["Radiohead", "Drake"]);
        assert_eq!(request.language(), ANY_LANGUAGE);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = AnalysisRequest::parse("English", " , ,").unwrap_err();
        assert!(matches!(err, MusicScopeError::NoArtistsEntered));
    }

    #[test]
    fn test_twenty_five_names_rejected() {
        let names: Vec<String> = (0..25).map(|i| format!("Artist {}", i)).collect();
        let err = AnalysisRequest::new("", &names).unwrap_err();
        match err {
            MusicScopeError::TooManyArtists { max, given } => {
                assert_eq!(max, 20);
                assert_eq!(given, 25);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err_message(&names).contains("maximum"));
    }

    #[test]
    fn test_exactly_twenty_accepted() {
        let names: Vec<String> = (0..20).map(|i| format!("Artist {}", i)).collect();
        let request = AnalysisRequest::new("Spanish", &names).unwrap();
        assert_eq!(request.artists().len(), 20);
        assert_eq!(request.language(), "Spanish");
    }

    #[test]
    fn test_deserialize_validates() {
        let names: Vec<String> = (0..25).map(|i| format!("Artist {}", i)).collect();
        let json = serde_json::json!({"language": "", "artists": names}).to_string();
        let err = serde_json::from_str::<AnalysisRequest>(&json).unwrap_err();
        assert!(err.to_string().contains("20 artists maximum"));

        let blank = serde_json::from_str::<AnalysisRequest>(r#"{"language": "", "artists": ["  ", ""]}"#);
        assert!(blank.unwrap_err().to_string().contains("at least one artist"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"language": " ", "artists": [" Radiohead ", ""]}"#).unwrap();
        assert_eq!(request.artists(), &["Radiohead"]);
        assert_eq!(request.language(), ANY_LANGUAGE);

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(serde_json::from_str::<AnalysisRequest>(&json).unwrap(), request);
    }

    fn err_message(names: &[String]) -> String {
        AnalysisRequest::new("", names).unwrap_err().to_string()
    }
}

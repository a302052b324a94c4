//! JSON to model converters.
//!
//! This module provides functions to convert raw Spotify Web API JSON
//! responses into [`ArtistRecord`]s.

use serde_json::Value;

use crate::error::{MusicScopeError, Result};
use crate::models::ArtistRecord;

/// Get string from JSON, returning empty string if not found.
fn get_str(json: &Value, key: &str) -> String {
    json.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Get the first image URL from an `images` array.
fn first_image(json: &Value) -> String {
    json.get("images")
        .and_then(|i| i.as_array())
        .and_then(|arr| arr.first())
        .and_then(|img| img.get("url"))
        .and_then(|u| u.as_str())
        .unwrap_or("")
        .to_string()
}

/// Extract genres from JSON.
fn extract_genres(json: &Value) -> Vec<String> {
    json.get("genres")
        .and_then(|g| g.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|g| g.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a catalog artist object.
///
/// Requires `name`; every other field falls back to an empty value.
pub fn parse_artist(json: &Value) -> Result<ArtistRecord> {
    let name = get_str(json, "name");
    if name.is_empty() {
        return Err(MusicScopeError::ApiError(
            "Artist object without a name".to_string(),
        ));
    }

    let id = json
        .get("id")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let external_url = json
        .get("external_urls")
        .and_then(|u| u.get("spotify"))
        .and_then(|s| s.as_str())
        .unwrap_or("")
        .to_string();

    let popularity = json
        .get("popularity")
        .and_then(|p| p.as_u64())
        .unwrap_or(0)
        .min(100) as u8;

    Ok(ArtistRecord {
        id,
        name,
        genres: extract_genres(json),
        image_url: first_image(json),
        external_url,
        popularity,
    })
}

/// Parse a list of artist objects, skipping malformed entries.
pub fn parse_artist_list(items: &[Value]) -> Vec<ArtistRecord> {
    items.iter().filter_map(|a| parse_artist(a).ok()).collect()
}

/// Extract the artist items of a search envelope (`{"artists": {"items": [...]}}`).
pub fn parse_search_artists(response: &Value) -> Vec<ArtistRecord> {
    response
        .get("artists")
        .and_then(|a| a.get("items"))
        .and_then(|i| i.as_array())
        .map(|items| parse_artist_list(items))
        .unwrap_or_default()
}

/// Extract the artists of a related-artists envelope (`{"artists": [...]}`).
pub fn parse_related_artists(response: &Value) -> Vec<ArtistRecord> {
    response
        .get("artists")
        .and_then(|a| a.as_array())
        .map(|items| parse_artist_list(items))
        .unwrap_or_default()
}

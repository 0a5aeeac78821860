use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RawRecord;

/// Placeholder the movie database uses for fields it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display fields for a single movie, shaped from a raw database record.
///
/// Every field is optional. Absent fields are skipped when serialized, so a
/// record with nothing in it serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl MovieDetails {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Labelled rows for the details panel, in display order.
    ///
    /// Title and poster are rendered separately and are not included.
    pub fn display_rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Year", &self.year),
            ("Rated", &self.rated),
            ("Released", &self.released),
            ("Runtime", &self.runtime),
            ("Genre", &self.genre),
            ("Director", &self.director),
            ("Writer", &self.writer),
            ("Actors", &self.actors),
            ("Plot", &self.plot),
            ("Language", &self.language),
            ("Country", &self.country),
            ("Awards", &self.awards),
            ("Rating", &self.rating),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.as_deref().map(|value| (label, value))
        })
        .collect()
    }
}

/// Shape a raw database record into [`MovieDetails`].
///
/// Only allow-listed keys survive, renamed to their display names. Missing,
/// non-string and "N/A" values are left out.
pub fn filter_movie_details(raw: &RawRecord) -> MovieDetails {
    let field = |key: &str| {
        raw.get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty() && *value != NOT_AVAILABLE)
            .map(str::to_string)
    };

    MovieDetails {
        title: field("Title"),
        year: field("Year"),
        rated: field("Rated"),
        released: field("Released"),
        runtime: field("Runtime"),
        genre: field("Genre"),
        director: field("Director"),
        writer: field("Writer"),
        actors: field("Actors"),
        plot: field("Plot"),
        language: field("Language"),
        country: field("Country"),
        awards: field("Awards"),
        poster: field("Poster"),
        rating: field("imdbRating"),
    }
}

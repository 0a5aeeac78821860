//! Response bodies in the movie database's wire format.

use serde::{Deserialize, Serialize};

use crate::{
    ClientError, MovieId, SearchPage, SearchResultItem, details::NOT_AVAILABLE,
    page_count,
};

/// A record exactly as the movie database returns it.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Error text for a search that matched nothing. This is a valid outcome,
/// not a failure.
pub const MOVIE_NOT_FOUND: &str = "Movie not found!";
pub const INVALID_API_KEY: &str = "Invalid API key!";
pub const INCORRECT_ID: &str = "Incorrect IMDb ID.";
pub const NOTHING_SPECIFIED: &str = "No movie or series specified.";

/// The database's string-encoded success flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderStatus {
    True,
    False,
}

/// Body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFailure {
    #[serde(rename = "Response")]
    pub response: ProviderStatus,
    #[serde(rename = "Error")]
    pub error: String,
}

impl ProviderFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            response: ProviderStatus::False,
            error: error.into(),
        }
    }
}

/// One entry of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl From<SearchHit> for SearchResultItem {
    fn from(hit: SearchHit) -> Self {
        let available = |value: Option<String>| {
            value.filter(|value| value != NOT_AVAILABLE)
        };
        Self {
            id: MovieId(hit.imdb_id),
            title: hit.title,
            year: available(hit.year),
            poster: available(hit.poster),
        }
    }
}

/// Body of a search request, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default, skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<SearchHit>,
    #[serde(
        rename = "totalResults",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: ProviderStatus,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn found(hits: Vec<SearchHit>, total_results: usize) -> Self {
        Self {
            search: hits,
            total_results: Some(total_results.to_string()),
            response: ProviderStatus::True,
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            search: Vec::new(),
            total_results: None,
            response: ProviderStatus::False,
            error: Some(MOVIE_NOT_FOUND.to_string()),
        }
    }

    /// Convert into a page of results.
    ///
    /// "Movie not found!" is an empty page. Any other failure is a
    /// [`ClientError::Provider`].
    pub fn into_page(self) -> Result<SearchPage, ClientError> {
        match self.response {
            ProviderStatus::True => {
                let total = self
                    .total_results
                    .as_deref()
                    .and_then(|total| total.trim().parse::<u32>().ok())
                    .unwrap_or(self.search.len() as u32);
                let results: Vec<SearchResultItem> =
                    self.search.into_iter().map(Into::into).collect();
                if results.is_empty() {
                    return Ok(SearchPage::empty());
                }
                Ok(SearchPage {
                    results,
                    page_count: page_count(total).max(1),
                })
            }
            ProviderStatus::False => match self.error {
                Some(error) if error == MOVIE_NOT_FOUND => {
                    Ok(SearchPage::empty())
                }
                Some(error) => Err(ClientError::Provider(error)),
                None => Err(ClientError::Provider(
                    "request rejected without a reason".to_string(),
                )),
            },
        }
    }
}

/// Check a raw record for the failure flag, returning the provider's error
/// text if the lookup did not succeed.
pub fn record_failure(record: &RawRecord) -> Option<String> {
    match record.get("Response").and_then(|value| value.as_str()) {
        Some("False") => Some(
            record
                .get("Error")
                .and_then(|value| value.as_str())
                .unwrap_or("request rejected without a reason")
                .to_string(),
        ),
        _ => None,
    }
}

//! Query parameters sent to the movie database.
//!
//! The api key is added by the client and is not part of these structs.

use serde::{Deserialize, Serialize};

/// Restricts searches to movies (as opposed to series or episodes).
pub const MOVIE_TYPE: &str = "movie";

/// Plot length requested for detail lookups.
pub const FULL_PLOT: &str = "full";

/// A paged title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMovies {
    #[serde(rename = "s")]
    pub text: String,
    pub page: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<&crate::SearchQuery> for SearchMovies {
    fn from(query: &crate::SearchQuery) -> Self {
        Self {
            text: query.text.trim().to_string(),
            page: query.page,
            kind: Some(MOVIE_TYPE.to_string()),
        }
    }
}

/// A full-record lookup by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMovie {
    #[serde(rename = "i")]
    pub id: crate::MovieId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
}

impl From<&crate::MovieId> for GetMovie {
    fn from(id: &crate::MovieId) -> Self {
        Self {
            id: id.clone(),
            plot: Some(FULL_PLOT.to_string()),
        }
    }
}

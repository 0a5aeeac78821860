pub mod api_client;
pub mod details;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use details::{MovieDetails, filter_movie_details};
pub use responses::RawRecord;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of results the movie database returns per search page.
pub const PAGE_SIZE: u32 = 10;

/// Opaque identifier for a movie record in the external database.
///
/// The empty identifier means "nothing selected".
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A title search for a single page of results.
///
/// Pages are 1-based. Text and page are replaced together when the user
/// starts a new search, so a new query always begins at page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: 1,
        }
    }

    /// The same search at another page. Pages below 1 clamp to 1.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            text: self.text.clone(),
            page: page.max(1),
        }
    }

    /// Translate a zero-based page index from a pagination control.
    pub fn at_selected_page(&self, selected: usize) -> Self {
        let page = u32::try_from(selected).unwrap_or(u32::MAX - 1) + 1;
        self.with_page(page)
    }

    /// Blank queries never reach the network.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The subset of a search hit the result list displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: MovieId,
    pub title: String,
    pub year: Option<String>,
    pub poster: Option<String>,
}

/// One page of search results along with the total number of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<SearchResultItem>,
    pub page_count: u32,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Number of pages needed to show `total_results` at [`PAGE_SIZE`] per page.
pub fn page_count(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

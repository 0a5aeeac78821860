//! Data fetching hooks.
//!
//! Both hooks follow the same cycle: idle, then loading while a request is
//! in flight, then idle again once it succeeds or fails. Only the response to
//! the most recent request is committed; see [`crate::state`].

pub mod use_movie_details;
pub mod use_search_results;

pub use use_movie_details::{MovieDetailsHookReturn, use_movie_details};
pub use use_search_results::{SearchResultsHookReturn, use_search_results};

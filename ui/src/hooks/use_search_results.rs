use payloads::{SearchQuery, SearchResultItem};
use yew::prelude::*;

use crate::get_api_client;
use crate::state::{RequestTracker, SearchAction, SearchFlags, SearchState};

/// Hook return type for paged search results
pub struct SearchResultsHookReturn {
    pub search_data_is_loading: bool,
    pub search_results: Vec<SearchResultItem>,
    pub page_count: u32,
    /// Reissue the current query, e.g. after a failed request. Does nothing
    /// while a request is in flight.
    pub refetch: Callback<()>,
}

/// Hook to search movie titles one page at a time.
///
/// A request is issued whenever `search_query` changes. An empty query
/// clears the results without touching the network. When a request resolves
/// the two flag callbacks receive the outcome: `set_show_no_results_message`
/// is true for a search that matched nothing and `set_search_error` is true
/// for a failed request.
///
/// The flag callbacks should be stable across renders (for example built
/// with `use_callback`); the fetch callback is rebuilt whenever they change.
#[hook]
pub fn use_search_results(
    search_query: SearchQuery,
    set_show_no_results_message: Callback<bool>,
    set_search_error: Callback<bool>,
) -> SearchResultsHookReturn {
    let state = use_reducer(SearchState::default);
    let tracker = use_memo((), |_| RequestTracker::<SearchQuery>::default());

    let fetch = {
        let state = state.clone();
        let tracker = tracker.clone();

        use_callback(
            (set_show_no_results_message, set_search_error),
            move |query: SearchQuery, (set_no_results, set_error)| {
                let state = state.clone();
                let tracker = tracker.clone();
                let set_no_results = set_no_results.clone();
                let set_error = set_error.clone();

                let ticket = tracker.issue(query);
                state.dispatch(SearchAction::Begin(ticket.clone()));

                yew::platform::spawn_local(async move {
                    let api_client = get_api_client();
                    let outcome = api_client
                        .search_movies(&ticket.key)
                        .await
                        .map_err(|e| e.to_string());

                    if !tracker.is_current(&ticket) {
                        tracing::debug!(
                            query = ?ticket.key,
                            generation = ticket.generation,
                            "search superseded"
                        );
                        return;
                    }
                    if let Err(error) = &outcome {
                        tracing::warn!(query = ?ticket.key, %error, "search failed");
                    }

                    let flags = SearchFlags::from_outcome(&outcome);
                    set_no_results.emit(flags.no_results);
                    set_error.emit(flags.error);
                    state.dispatch(SearchAction::Resolve { ticket, outcome });
                });
            },
        )
    };

    // Fetch when the query or page changes
    {
        let fetch = fetch.clone();
        let state = state.clone();
        let tracker = tracker.clone();

        use_effect_with(search_query.clone(), move |query| {
            if query.is_empty() {
                tracker.clear();
                state.dispatch(SearchAction::Clear);
            } else {
                fetch.emit(query.clone());
            }
        });
    }

    let is_loading = state.is_loading;
    SearchResultsHookReturn {
        search_data_is_loading: is_loading,
        search_results: state.results.clone(),
        page_count: state.page_count,
        refetch: Callback::from(move |_| {
            // the request in flight already answers this query
            if !search_query.is_empty() && !is_loading {
                fetch.emit(search_query.clone());
            }
        }),
    }
}

use payloads::{MovieDetails, MovieId};
use yew::prelude::*;

use crate::get_api_client;
use crate::state::{DetailsAction, DetailsState, RequestTracker};

/// Hook return type for a single movie's details
pub struct MovieDetailsHookReturn {
    /// Empty when nothing is selected or the last request failed
    pub movie_details: MovieDetails,
    pub details_data_is_loading: bool,
    pub failed: bool,
    /// Retry the current id regardless of whether it was fetched before.
    /// Does nothing while a request is in flight.
    pub refetch: Callback<()>,
}

/// Hook to fetch and shape the details of the selected movie.
///
/// Fetches only when `movie_id` differs from the id of the previous request;
/// rerendering with the same id issues nothing. Failures are logged and
/// leave the details empty.
#[hook]
pub fn use_movie_details(movie_id: MovieId) -> MovieDetailsHookReturn {
    let state = use_reducer(DetailsState::default);
    let tracker = use_memo((), |_| RequestTracker::<MovieId>::default());

    let fetch = {
        let state = state.clone();
        let tracker = tracker.clone();

        use_callback((), move |movie_id: MovieId, _| {
            let state = state.clone();
            let tracker = tracker.clone();

            let ticket = tracker.issue(movie_id);
            state.dispatch(DetailsAction::Begin(ticket.clone()));

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let outcome = api_client
                    .get_movie_details(&ticket.key)
                    .await
                    .map_err(|e| e.to_string());

                if !tracker.is_current(&ticket) {
                    tracing::debug!(
                        movie_id = %ticket.key,
                        generation = ticket.generation,
                        "details request superseded"
                    );
                    return;
                }
                if let Err(error) = &outcome {
                    tracing::warn!(movie_id = %ticket.key, %error, "failed to load movie details");
                }

                state.dispatch(DetailsAction::Resolve { ticket, outcome });
            });
        })
    };

    // Fetch when the selected id changes
    {
        let fetch = fetch.clone();
        let state = state.clone();
        let tracker = tracker.clone();

        use_effect_with(movie_id.clone(), move |movie_id| {
            if movie_id.is_empty() {
                tracker.clear();
                state.dispatch(DetailsAction::Clear);
            } else if state.needs_fetch(movie_id) {
                fetch.emit(movie_id.clone());
            }
        });
    }

    let is_loading = state.is_loading;
    MovieDetailsHookReturn {
        movie_details: state.details.clone(),
        details_data_is_loading: is_loading,
        failed: state.failed,
        refetch: Callback::from(move |_| {
            if !movie_id.is_empty() && !is_loading {
                fetch.emit(movie_id.clone());
            }
        }),
    }
}

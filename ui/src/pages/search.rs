use payloads::{MovieId, SearchQuery};
use yew::prelude::*;

use crate::components::{
    MovieDetailsPanel, MovieSearchBar, MovieSearchResults, PaginationControls,
    pagination_controls::should_paginate,
};
use crate::contexts::MovieDetailsContext;
use crate::hooks::{use_movie_details, use_search_results};

/// The search page owns all session state: the input, the active query, the
/// result flags, the selected movie and whether its panel is open.
#[function_component]
pub fn SearchPage() -> Html {
    // Result flags, set by the search hook and cleared on input
    let show_no_results_message = use_state(|| false);
    let search_error = use_state(|| false);

    // User input
    let input_value = use_state(String::new);
    let search_query = use_state(SearchQuery::default);

    // Movie details
    let movie_details_id = use_state(MovieId::default);
    let show_movie_details = use_state(|| false);

    // State setters never change, so these callbacks are built once
    let set_show_no_results_message = {
        let setter = show_no_results_message.setter();
        use_callback((), move |value: bool, _| setter.set(value))
    };
    let set_search_error = {
        let setter = search_error.setter();
        use_callback((), move |value: bool, _| setter.set(value))
    };

    let search = use_search_results(
        (*search_query).clone(),
        set_show_no_results_message,
        set_search_error,
    );

    let details = use_movie_details((*movie_details_id).clone());

    let on_input_change = {
        let input_value = input_value.clone();
        let show_no_results_message = show_no_results_message.clone();
        let search_error = search_error.clone();
        Callback::from(move |value: String| {
            input_value.set(value);
            show_no_results_message.set(false);
            search_error.set(false);
        })
    };

    let on_search = {
        let input_value = input_value.clone();
        let search_query = search_query.clone();
        let refetch = search.refetch.clone();
        Callback::from(move |_| {
            let query = SearchQuery::new((*input_value).clone());
            if query == *search_query {
                // same text on page 1: the hook won't see a change
                refetch.emit(());
            } else {
                search_query.set(query);
            }
        })
    };

    let on_page_change = {
        let search_query = search_query.clone();
        Callback::from(move |selected: usize| {
            search_query.set(search_query.at_selected_page(selected));
        })
    };

    let toggle_visibility = {
        let show_movie_details = show_movie_details.clone();
        Callback::from(move |_| show_movie_details.set(!*show_movie_details))
    };

    let set_selected_id = {
        let movie_details_id = movie_details_id.clone();
        let failed = details.failed;
        let refetch = details.refetch.clone();
        Callback::from(move |movie_id: MovieId| {
            if movie_id == *movie_details_id && failed {
                refetch.emit(());
            } else {
                movie_details_id.set(movie_id);
            }
        })
    };

    let context = MovieDetailsContext {
        show_movie_details: *show_movie_details,
        movie_details: details.movie_details.clone(),
        details_data_is_loading: details.details_data_is_loading,
        toggle_visibility,
        set_selected_id,
    };

    let show_pagination =
        should_paginate(search.search_results.len(), search.page_count);

    html! {
        <div class="space-y-4">
            <MovieSearchBar
                value={(*input_value).clone()}
                on_input_change={on_input_change}
                on_search={on_search}
            />
            <ContextProvider<MovieDetailsContext> context={context}>
                <MovieSearchResults
                    movies={search.search_results.clone()}
                    data_is_loading={search.search_data_is_loading}
                    show_no_results_message={*show_no_results_message}
                    show_search_error={*search_error}
                />
                if *show_movie_details {
                    <MovieDetailsPanel />
                }
            </ContextProvider<MovieDetailsContext>>
            if show_pagination {
                <PaginationControls
                    page_count={search.page_count}
                    selected={(search_query.page as usize).saturating_sub(1)}
                    on_page_change={on_page_change}
                    is_loading={search.search_data_is_loading}
                />
            }
        </div>
    }
}

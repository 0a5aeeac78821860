use payloads::SearchResultItem;
use yew::prelude::*;

use crate::contexts::use_movie_details_context;

#[derive(Properties, PartialEq)]
pub struct MovieSearchResultsProps {
    pub movies: Vec<SearchResultItem>,
    pub data_is_loading: bool,
    pub show_no_results_message: bool,
    pub show_search_error: bool,
}

#[function_component]
pub fn MovieSearchResults(props: &MovieSearchResultsProps) -> Html {
    let context = use_movie_details_context();

    if props.data_is_loading {
        return html! {
            <div id="search-loading" class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading movies..."}
                </p>
            </div>
        };
    }

    if props.show_search_error {
        return html! {
            <div id="search-error" class="p-4 mt-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                        border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {"Something went wrong while searching. Please try again."}
                </p>
            </div>
        };
    }

    if props.show_no_results_message {
        return html! {
            <div id="no-results" class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No movies found. Try a different title."}
                </p>
            </div>
        };
    }

    html! {
        <ul id="search-results" class="mt-4 divide-y divide-neutral-200 dark:divide-neutral-700">
            {for props.movies.iter().map(|movie| {
                let on_select = {
                    let context = context.clone();
                    let movie_id = movie.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        context.select(movie_id.clone())
                    })
                };
                html! {
                    <li key={movie.id.to_string()}>
                        <button
                            onclick={on_select}
                            class="w-full flex items-center gap-4 py-3 px-2 \
                                   text-left hover:bg-neutral-50 \
                                   dark:hover:bg-neutral-800 rounded-md"
                        >
                            {match &movie.poster {
                                Some(poster) => html! {
                                    <img src={poster.clone()} alt=""
                                        class="w-10 h-14 object-cover rounded" />
                                },
                                None => html! {
                                    <div class="w-10 h-14 rounded \
                                                bg-neutral-200 dark:bg-neutral-700" />
                                },
                            }}
                            <span class="font-medium">{movie.title.clone()}</span>
                            {movie.year.as_ref().map(|year| html! {
                                <span class="text-sm text-neutral-500">
                                    {format!("({year})")}
                                </span>
                            })}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}

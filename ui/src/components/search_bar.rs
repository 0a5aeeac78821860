use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MovieSearchBarProps {
    pub value: AttrValue,
    pub on_input_change: Callback<String>,
    pub on_search: Callback<()>,
}

/// Title input with a search button. Pressing Enter also searches.
#[function_component]
pub fn MovieSearchBar(props: &MovieSearchBarProps) -> Html {
    let on_input = {
        let on_input_change = props.on_input_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input_change.emit(input.value());
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex gap-2">
            <input
                id="movie-search"
                type="search"
                value={props.value.clone()}
                oninput={on_input}
                placeholder="Search movies"
                aria-label="Search movies"
                class="flex-1 px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md \
                       bg-white dark:bg-neutral-800 \
                       text-neutral-900 dark:text-neutral-100 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500"
            />
            <button
                id="search-button"
                type="submit"
                class="px-4 py-2 rounded-md text-sm font-medium text-white \
                       bg-blue-600 hover:bg-blue-700 \
                       transition-colors duration-200"
            >
                {"Search"}
            </button>
        </form>
    }
}

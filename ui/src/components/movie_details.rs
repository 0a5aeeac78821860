use yew::prelude::*;

use crate::contexts::use_movie_details_context;

/// Panel with the selected movie's details.
#[function_component]
pub fn MovieDetailsPanel() -> Html {
    let context = use_movie_details_context();
    let on_close = context.toggle_visibility.reform(|_: MouseEvent| ());

    let body = if context.details_data_is_loading {
        html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading details..."}
            </p>
        }
    } else if context.movie_details.is_empty() {
        html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"No details available"}
            </p>
        }
    } else {
        let details = &context.movie_details;
        html! {
            <div class="flex gap-6">
                {details.poster.as_ref().map(|poster| html! {
                    <img src={poster.clone()} alt={details.title.clone().unwrap_or_default()}
                        class="w-40 rounded-md shadow" />
                })}
                <div class="flex-1">
                    <h2 class="text-2xl font-bold mb-4">
                        {details.title.clone().unwrap_or_default()}
                    </h2>
                    <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm">
                        {for details.display_rows().into_iter().map(|(label, value)| html! {
                            <>
                                <dt class="font-semibold text-neutral-700 \
                                           dark:text-neutral-300">{label.to_string()}</dt>
                                <dd class="text-neutral-600 \
                                           dark:text-neutral-400">{value.to_string()}</dd>
                            </>
                        })}
                    </dl>
                </div>
            </div>
        }
    };

    html! {
        <section id="movie-details" class="mt-6 p-6 rounded-lg border border-neutral-200 \
                        dark:border-neutral-700 bg-white dark:bg-neutral-800">
            <div class="flex justify-end">
                <button
                    onclick={on_close}
                    aria-label="Close details"
                    class="text-neutral-500 hover:text-neutral-700 \
                           dark:hover:text-neutral-300"
                >
                    {"✕"}
                </button>
            </div>
            {body}
        </section>
    }
}

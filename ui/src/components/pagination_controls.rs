use yew::prelude::*;

/// Pages shown around the selected page
pub const PAGE_RANGE_DISPLAYED: usize = 4;
/// Pages always shown at each end
pub const MARGIN_PAGES_DISPLAYED: usize = 2;

/// Pagination is only worth showing when there is somewhere to go.
pub fn should_paginate(result_count: usize, page_count: u32) -> bool {
    result_count > 0 && page_count > 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index
    Page(usize),
    Break,
}

/// The page buttons to render, with breaks where pages are skipped.
pub fn page_items(
    page_count: usize,
    selected: usize,
    range: usize,
    margin: usize,
) -> Vec<PageItem> {
    if page_count <= range + 2 * margin {
        return (0..page_count).map(PageItem::Page).collect();
    }

    let mut start = selected.saturating_sub(range / 2);
    let mut end = start + range;
    if end > page_count {
        end = page_count;
        start = page_count - range;
    }

    let visible = |index: usize| {
        index < margin || index >= page_count - margin || (start..end).contains(&index)
    };

    let mut items = Vec::new();
    let mut last = None;
    for index in (0..page_count).filter(|index| visible(*index)) {
        let gap = match last {
            Some(previous) => index > previous + 1,
            None => index > 0,
        };
        if gap {
            items.push(PageItem::Break);
        }
        items.push(PageItem::Page(index));
        last = Some(index);
    }
    if last.is_some_and(|previous| previous + 1 < page_count) {
        items.push(PageItem::Break);
    }
    items
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page_count: u32,
    /// Currently selected page (0-indexed)
    pub selected: usize,
    /// Callback with the 0-indexed page the user picked
    pub on_page_change: Callback<usize>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        page_count,
        selected,
        is_loading,
        ..
    } = *props;
    let page_count = page_count as usize;

    if page_count <= 1 {
        return html! {};
    }

    let is_first_page = selected == 0;
    let is_last_page = selected + 1 >= page_count;

    let go_to = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let prev_disabled = is_first_page || is_loading;
    let next_disabled = is_last_page || is_loading;

    let button_class = |disabled: bool, active: bool| {
        if active {
            "px-3 py-2 border border-blue-600 rounded-md text-sm \
             font-semibold text-white bg-blue-600"
        } else if disabled {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    let items = page_items(
        page_count,
        selected,
        PAGE_RANGE_DISPLAYED,
        MARGIN_PAGES_DISPLAYED,
    );

    html! {
        <nav id="pagination" aria-label="Pagination" class="flex items-center justify-center gap-2 mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={go_to(selected.saturating_sub(1))}
                disabled={prev_disabled}
                class={button_class(prev_disabled, false)}
                aria-label="Previous page"
            >
                {"←"}
            </button>

            {for items.into_iter().map(|item| match item {
                PageItem::Page(index) => html! {
                    <button
                        onclick={go_to(index)}
                        disabled={is_loading}
                        class={button_class(is_loading, index == selected)}
                    >
                        {(index + 1).to_string()}
                    </button>
                },
                PageItem::Break => html! {
                    <span class="px-2 text-sm text-neutral-500">{"..."}</span>
                },
            })}

            <button
                onclick={go_to(selected + 1)}
                disabled={next_disabled}
                class={button_class(next_disabled, false)}
                aria-label="Next page"
            >
                {"→"}
            </button>
        </nav>
    }
}

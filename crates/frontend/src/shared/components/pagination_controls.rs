use crate::shared::icons::icon;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

/// Prev/next pager over a [`PageWindow`] (pages are 1-based).
#[component]
pub fn PaginationControls(
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Called with the requested 1-based page
    on_page_change: Callback<usize>,

    /// Optional page size picker
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_default();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !window.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get();
                    if w.has_prev() {
                        on_page_change.run(w.page - 1);
                    }
                }
                disabled=move || !window.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    format!("Page {} of {}", w.page, w.total_pages)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get();
                    if w.has_next() {
                        on_page_change.run(w.page + 1);
                    }
                }
                disabled=move || !window.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(window.get().total_pages)
                disabled=move || !window.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-summary">{move || window.get().summary()}</span>
            {on_page_size_change.filter(|_| !page_size_opts.is_empty()).map(|on_size| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_size.run(size);
                        }
                    }
                    prop:value=move || window.get().page_size.to_string()
                >
                    {page_size_opts.iter().map(|&size| view! {
                        <option value=size.to_string()>{size.to_string()}</option>
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

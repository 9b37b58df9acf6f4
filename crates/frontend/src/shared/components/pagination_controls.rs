use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages shown around the current one before collapsing into "…"
const WINDOW: usize = 2;

/// Page buttons to render for `current` of `total` (1-based); `None` is a gap
pub fn visible_pages(current: usize, total: usize) -> Vec<Option<usize>> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut pages = Vec::new();
    let mut last = 0;
    for page in 1..=total {
        let near = page + WINDOW >= current && page <= current + WINDOW;
        if page == 1 || page == total || near {
            if last != 0 && page > last + 1 {
                pages.push(None);
            }
            pages.push(Some(page));
            last = page;
        }
    }
    pages
}

/// PaginationControls component - page navigation for server-side paging
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                visible_pages(current, total_pages.get())
                    .into_iter()
                    .map(|slot| match slot {
                        Some(page) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active={page == current}
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        None => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("Всего: {}", total_count.get())}
            </span>
        </div>
    }
}

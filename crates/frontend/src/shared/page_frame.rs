//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a002_invoice--detail"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// CSS class of the page root for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_customer--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
    }
}

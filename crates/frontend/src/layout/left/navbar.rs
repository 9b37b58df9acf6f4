use crate::routes::routes::{CUSTOMERS_PATH, INVOICES_PATH};
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;

/// Sections of the navbar: (icon key, route, title)
pub const NAV_ITEMS: [(&str, &str, &str); 2] = [
    ("customers", CUSTOMERS_PATH, "Клиенты"),
    ("invoices", INVOICES_PATH, "Счета"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS.into_iter().map(|(key, href, title)| {
                    view! {
                        <li>
                            <A href=href attr:class="main-nav-bar__link">
                                {icons::icon(key)}
                                <span>{title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

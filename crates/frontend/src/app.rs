use crate::layout::left::Navbar;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    log::info!(
        "billing admin started, api base: {}",
        crate::shared::config::config().api.base_url
    );

    view! {
        <Router>
            <Shell
                left=|| view! { <Navbar /> }.into_any()
                center=|| view! { <AppRoutes /> }.into_any()
            />
        </Router>
    }
}

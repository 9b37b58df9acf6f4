pub mod navbar;

pub use navbar::Navbar;

use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <div data-zone="left" class="left">
            {children()}
        </div>
    }
}

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_invoice::ui::details::InvoiceDetails;
use crate::domain::a002_invoice::ui::list::InvoiceList;
use contracts::domain::a002_invoice::aggregate::InvoiceId;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::{path, NavigateOptions};

pub const CUSTOMERS_PATH: &str = "/customers";
pub const INVOICES_PATH: &str = "/invoices";

/// Editor route of an existing invoice
pub fn invoice_path(id: InvoiceId) -> String {
    format!("{}/{}", INVOICES_PATH, id)
}

/// Editor route of a new invoice
pub fn new_invoice_path() -> String {
    format!("{}/new", INVOICES_PATH)
}

/// Leaving the editor replaces its history entry, so "Back" does not
/// return to a submitted form
pub fn back_to_list_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="page">"Страница не найдена"</div> }>
            <Route path=path!("/") view=|| view! { <Redirect path=CUSTOMERS_PATH /> } />
            <Route path=path!("/customers") view=CustomerList />
            <Route path=path!("/invoices") view=InvoiceList />
            <Route path=path!("/invoices/:id") view=InvoiceDetails />
        </Routes>
    }
}

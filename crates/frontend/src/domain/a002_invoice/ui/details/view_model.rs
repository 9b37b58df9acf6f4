use super::state::{FormMode, InvoiceFormState, SubmitRequest};
use crate::domain::a001_customer::api as customers_api;
use crate::domain::a002_invoice::api;
use crate::shared::api_utils::ApiError;
use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the invoice create/edit form
#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub state: RwSignal<InvoiceFormState>,
}

impl InvoiceDetailsViewModel {
    pub fn new(mode: FormMode) -> Self {
        Self {
            state: RwSignal::new(InvoiceFormState::new(mode)),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
        let state = self.state;
        move || state.with(|s| s.is_editing())
    }

    /// Value of a draft field for binding to an input
    pub fn field_value(&self, field: InvoiceField) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let state = self.state;
        move || state.with(|s| s.draft.field_value(field))
    }

    /// Server error of a field, if any
    pub fn field_error(&self, field: InvoiceField) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
        let state = self.state;
        move || state.with(|s| s.error_for(field))
    }

    /// `(value, label)` pairs for the customer selector
    pub fn customer_options(&self) -> impl Fn() -> Vec<(String, String)> + Copy + Send + Sync + 'static {
        let state = self.state;
        move || {
            state.with(|s| {
                s.customers
                    .iter()
                    .map(|c| (c.id.to_string(), c.display_name()))
                    .collect()
            })
        }
    }

    pub fn change_field(&self, name: &str, value: String) {
        self.state.update(|s| s.set_field(name, &value));
    }

    /// Load the selector options; `on_failed` leaves the page
    pub fn load_customers(&self, on_failed: Rc<dyn Fn(())>) {
        let state = self.state;
        spawn_local(async move {
            match customers_api::fetch_all().await {
                Ok(customers) => {
                    if state.try_update(|s| s.apply_customers(customers)).is_none() {
                        log::debug!("Invoice form closed before customers arrived");
                    }
                }
                Err(e) => {
                    log::error!("Failed to load customers for invoice form: {}", e);
                    (on_failed)(());
                }
            }
        });
    }

    /// Switch the form to `mode` and load the invoice when editing
    pub fn open(&self, mode: FormMode, on_failed: Rc<dyn Fn(())>) {
        self.state.update(|s| s.switch_mode(mode));

        let FormMode::Edit(id) = mode else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(invoice) => match apply_loaded_invoice(state, mode, &invoice) {
                    Some(true) => {}
                    Some(false) => log::debug!("Dropped invoice {} loaded for a previous route", id),
                    None => log::debug!("Invoice form closed before invoice {} arrived", id),
                },
                Err(e) => {
                    log::error!("Failed to load invoice {}: {}", id, e);
                    (on_failed)(());
                }
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let request = self.state.with_untracked(|s| s.submit_request());
        let state = self.state;
        spawn_local(async move {
            let result = match request {
                SubmitRequest::Create(payload) => api::create_invoice(&payload).await,
                SubmitRequest::Update(id, payload) => api::update_invoice(id, &payload).await,
            };
            finish_save(state, result, on_saved.as_ref());
        });
    }
}

/// Apply an invoice that arrived for `mode`.
///
/// `Some(false)` if the form has moved to another route, `None` if the page is gone.
pub fn apply_loaded_invoice(
    state: RwSignal<InvoiceFormState>,
    mode: FormMode,
    invoice: &Invoice,
) -> Option<bool> {
    state.try_update(|s| s.apply_invoice_for(mode, invoice))
}

/// Completion of a create/update: leave the form on success, otherwise show
/// field errors or log the failure
pub fn finish_save(
    state: RwSignal<InvoiceFormState>,
    result: Result<Invoice, ApiError>,
    on_saved: &dyn Fn(()),
) {
    match result {
        Ok(invoice) => {
            log::info!("Invoice {} saved", invoice.id);
            on_saved(());
        }
        Err(e) => {
            let mapped = state.try_update(|s| s.apply_submit_error(&e)).unwrap_or(false);
            if !mapped {
                log::error!("Failed to save invoice: {}", e);
            }
        }
    }
}

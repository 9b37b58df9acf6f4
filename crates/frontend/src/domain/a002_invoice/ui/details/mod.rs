mod state;
mod view;
mod view_model;

pub use state::{FormMode, InvoiceFormState, SubmitRequest, NEW_SENTINEL};
pub use view::InvoiceDetails;
pub use view_model::InvoiceDetailsViewModel;

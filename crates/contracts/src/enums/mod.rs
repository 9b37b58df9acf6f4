pub mod invoice_status;

pub use invoice_status::InvoiceStatus;

pub mod badge;
pub mod input;
pub mod select;

pub use badge::{Badge, InvoiceStatusBadge};
pub use input::Input;
pub use select::Select;

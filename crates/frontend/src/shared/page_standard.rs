//! Page category constants for page standardization.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_customer--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_customer/` directory.

/// List of records: table with pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

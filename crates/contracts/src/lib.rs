//! Wire contracts between the billing admin frontend and the REST API.
//!
//! Every type here mirrors a JSON shape produced or consumed by the API
//! (API Platform, JSON-LD "hydra" dialect).

pub mod domain;
pub mod enums;
pub mod shared;

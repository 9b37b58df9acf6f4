use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::hydra::HydraCollection;
use serde::Serialize;

use crate::shared::api_utils::{self, api_url, ApiError};

/// Query of one page of the customer collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub pagination: bool,
    pub count: usize,
    pub page: usize,
}

impl PageQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            pagination: true,
            count: page_size,
            page,
        }
    }
}

/// Path with query string, e.g. `/customers?pagination=true&count=10&page=2`
pub fn page_path(query: &PageQuery) -> String {
    let qs = serde_qs::to_string(query).unwrap_or_default();
    format!("{}?{}", Customer::collection_path(), qs)
}

/// Fetch one page of customers
pub async fn fetch_page(query: PageQuery) -> Result<HydraCollection<Customer>, ApiError> {
    api_utils::get_json(&api_url(&page_path(&query))).await
}

/// Fetch all customers (for selectors)
pub async fn fetch_all() -> Result<Vec<Customer>, ApiError> {
    let envelope: HydraCollection<Customer> =
        api_utils::get_json(&api_url(&Customer::collection_path())).await?;
    Ok(envelope.into_items())
}

/// Delete customer
pub async fn delete_customer(id: CustomerId) -> Result<(), ApiError> {
    api_utils::delete(&api_url(&Customer::item_path(id))).await
}

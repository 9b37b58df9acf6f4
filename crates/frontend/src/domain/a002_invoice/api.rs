use contracts::domain::a002_invoice::aggregate::{Invoice, InvoiceId, InvoicePayload};
use contracts::domain::common::AggregateRoot;
use contracts::shared::hydra::HydraCollection;

use crate::shared::api_utils::{self, api_url, ApiError};

/// Fetch all invoices
pub async fn fetch_all() -> Result<Vec<Invoice>, ApiError> {
    let envelope: HydraCollection<Invoice> =
        api_utils::get_json(&api_url(&Invoice::collection_path())).await?;
    Ok(envelope.into_items())
}

/// Fetch invoice by id
pub async fn fetch_by_id(id: InvoiceId) -> Result<Invoice, ApiError> {
    api_utils::get_json(&api_url(&Invoice::item_path(id))).await
}

/// Create new invoice
pub async fn create_invoice(payload: &InvoicePayload) -> Result<Invoice, ApiError> {
    api_utils::post_json(&api_url(&Invoice::collection_path()), payload).await
}

/// Update invoice
pub async fn update_invoice(id: InvoiceId, payload: &InvoicePayload) -> Result<Invoice, ApiError> {
    api_utils::put_json(&api_url(&Invoice::item_path(id)), payload).await
}

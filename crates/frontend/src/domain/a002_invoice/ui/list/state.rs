use contracts::domain::a002_invoice::aggregate::Invoice;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct InvoiceListState {
    pub items: Vec<Invoice>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InvoiceListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Newest first, as the API does not guarantee an order
    pub fn apply_items(&mut self, mut items: Vec<Invoice>) {
        items.sort_by(|a, b| b.sent_at.cmp(&a.sent_at).then(b.id.cmp(&a.id)));
        self.items = items;
        self.loading = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

pub fn create_state() -> RwSignal<InvoiceListState> {
    RwSignal::new(InvoiceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: i64, sent_at: Option<&str>) -> Invoice {
        let sent_at = sent_at
            .map(|s| format!("\"{}\"", s))
            .unwrap_or_else(|| "null".to_string());
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "amount": 10, "status": "SENT", "sentAt": {sent_at},
                "customer": {{"id": 1, "firstName": "A", "lastName": "B"}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_items_sorted_newest_first() {
        let mut state = InvoiceListState::default();
        state.begin_load();
        assert!(state.loading);

        state.apply_items(vec![
            invoice(1, Some("2019-01-01T00:00:00Z")),
            invoice(2, None),
            invoice(3, Some("2019-06-01T00:00:00Z")),
        ]);
        let ids: Vec<i64> = state.items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!state.loading);
    }

    #[test]
    fn test_error_stops_loading() {
        let mut state = InvoiceListState::default();
        state.begin_load();
        state.apply_error("HTTP 500: boom".into());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 500: boom"));
    }
}

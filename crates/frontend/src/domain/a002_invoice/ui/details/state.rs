use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_invoice::aggregate::{
    Invoice, InvoiceDto, InvoiceField, InvoiceId, InvoicePayload,
};
use contracts::domain::common::AggregateId;
use contracts::shared::violations::{to_field_errors, FieldErrors};

use crate::shared::api_utils::ApiError;

/// Route parameter value that opens an empty form
pub const NEW_SENTINEL: &str = "new";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(InvoiceId),
}

impl FormMode {
    /// `"new"` or a numeric id; anything else is not a valid editor route
    pub fn parse(param: &str) -> Option<Self> {
        if param == NEW_SENTINEL {
            return Some(FormMode::Create);
        }
        InvoiceId::from_string(param).ok().map(FormMode::Edit)
    }
}

/// What the submit button sends
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRequest {
    Create(InvoicePayload),
    Update(InvoiceId, InvoicePayload),
}

#[derive(Clone, Debug)]
pub struct InvoiceFormState {
    pub mode: FormMode,
    pub draft: InvoiceDto,
    pub errors: FieldErrors,
    /// Options of the customer selector
    pub customers: Vec<Customer>,
}

impl InvoiceFormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            draft: InvoiceDto::default(),
            errors: FieldErrors::new(),
            customers: Vec::new(),
        }
    }

    /// The route parameter changed: start over with an empty draft, keeping
    /// the already loaded customer options
    pub fn switch_mode(&mut self, mode: FormMode) {
        if self.mode == mode {
            return;
        }
        let customers = std::mem::take(&mut self.customers);
        *self = Self::new(mode);
        self.apply_customers(customers);
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Customer list arrived: fill the selector and preselect the first
    /// customer unless one is already chosen
    pub fn apply_customers(&mut self, customers: Vec<Customer>) {
        if self.draft.customer.is_none() {
            self.draft.customer = customers.first().map(|c| c.id);
        }
        self.customers = customers;
    }

    /// Existing invoice arrived: copy amount, status and customer into the draft
    pub fn apply_invoice(&mut self, invoice: &Invoice) {
        self.draft = InvoiceDto::from_invoice(invoice);
    }

    /// Apply an invoice requested for `mode`. A response for a route the form
    /// has already left is dropped and `false` is returned.
    pub fn apply_invoice_for(&mut self, mode: FormMode, invoice: &Invoice) -> bool {
        if self.mode != mode {
            return false;
        }
        self.apply_invoice(invoice);
        true
    }

    /// Generic change handler keyed by the form field name
    pub fn set_field(&mut self, name: &str, value: &str) {
        match InvoiceField::from_name(name) {
            Some(field) => {
                if !self.draft.set_field(field, value) {
                    log::warn!("Ignored value {:?} for field {}", value, name);
                }
            }
            None => log::warn!("Unknown invoice field: {}", name),
        }
    }

    pub fn error_for(&self, field: InvoiceField) -> Option<String> {
        self.errors.get(field.name()).cloned()
    }

    pub fn submit_request(&self) -> SubmitRequest {
        let payload = self.draft.to_payload();
        match self.mode {
            FormMode::Create => SubmitRequest::Create(payload),
            FormMode::Edit(id) => SubmitRequest::Update(id, payload),
        }
    }

    /// Map server violations onto fields. Returns `false` for failures
    /// without field detail; those leave the form untouched.
    pub fn apply_submit_error(&mut self, error: &ApiError) -> bool {
        match error.violations() {
            Some(violations) => {
                self.errors = to_field_errors(violations);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerId;
    use contracts::enums::InvoiceStatus;
    use contracts::shared::violations::Violation;

    fn customer(id: i64) -> Customer {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "firstName": "F", "lastName": "L", "email": "e@example.com"}}"#
        ))
        .unwrap()
    }

    fn invoice() -> Invoice {
        serde_json::from_str(
            r#"{"id": 12, "amount": 350, "status": "CANCELLED",
                "customer": {"id": 5, "firstName": "Jean", "lastName": "Dupont"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(FormMode::parse("new"), Some(FormMode::Create));
        assert_eq!(FormMode::parse("42"), Some(FormMode::Edit(InvoiceId(42))));
        assert_eq!(FormMode::parse("abc"), None);
        assert_eq!(FormMode::parse(""), None);
    }

    #[test]
    fn test_new_form_defaults_to_sent_and_first_customer() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        assert!(!state.is_editing());
        assert_eq!(state.draft.status, InvoiceStatus::Sent);
        assert_eq!(state.draft.customer, None);

        state.apply_customers(vec![customer(8), customer(3)]);
        assert_eq!(state.draft.customer, Some(CustomerId(8)));
        assert_eq!(state.customers.len(), 2);
    }

    #[test]
    fn test_customer_list_keeps_existing_choice() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.set_field("customer", "3");
        state.apply_customers(vec![customer(8), customer(3)]);
        assert_eq!(state.draft.customer, Some(CustomerId(3)));
    }

    #[test]
    fn test_empty_customer_list_leaves_selection_empty() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.apply_customers(Vec::new());
        assert_eq!(state.draft.customer, None);
    }

    #[test]
    fn test_edit_mode_populates_from_invoice() {
        let mut state = InvoiceFormState::new(FormMode::Edit(InvoiceId(12)));
        assert!(state.is_editing());

        state.apply_invoice(&invoice());
        assert_eq!(state.draft.amount, "350");
        assert_eq!(state.draft.status, InvoiceStatus::Cancelled);
        assert_eq!(state.draft.customer, Some(CustomerId(5)));

        // The customer list resolving later must not override the invoice's customer
        state.apply_customers(vec![customer(1)]);
        assert_eq!(state.draft.customer, Some(CustomerId(5)));
    }

    #[test]
    fn test_invoice_for_previous_route_is_dropped() {
        let mut state = InvoiceFormState::new(FormMode::Edit(InvoiceId(12)));
        state.switch_mode(FormMode::Edit(InvoiceId(20)));

        assert!(!state.apply_invoice_for(FormMode::Edit(InvoiceId(12)), &invoice()));
        assert_eq!(state.draft, InvoiceDto::default());

        state.switch_mode(FormMode::Create);
        assert!(!state.apply_invoice_for(FormMode::Edit(InvoiceId(20)), &invoice()));
        assert_eq!(state.draft.amount, "");
    }

    #[test]
    fn test_invoice_for_current_route_is_applied() {
        let mut state = InvoiceFormState::new(FormMode::Edit(InvoiceId(12)));
        assert!(state.apply_invoice_for(FormMode::Edit(InvoiceId(12)), &invoice()));
        assert_eq!(state.draft.amount, "350");
    }

    #[test]
    fn test_switch_mode_resets_draft() {
        let mut state = InvoiceFormState::new(FormMode::Edit(InvoiceId(12)));
        state.apply_customers(vec![customer(1), customer(2)]);
        state.apply_invoice(&invoice());

        state.switch_mode(FormMode::Create);
        assert!(!state.is_editing());
        assert_eq!(state.draft.amount, "");
        assert_eq!(state.draft.status, InvoiceStatus::Sent);
        assert_eq!(state.draft.customer, Some(CustomerId(1)));
        assert_eq!(state.customers.len(), 2);
    }

    #[test]
    fn test_set_field_is_generic() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.set_field("amount", "99.9");
        state.set_field("status", "PAID");
        state.set_field("unknown", "x");
        assert_eq!(state.draft.amount, "99.9");
        assert_eq!(state.draft.status, InvoiceStatus::Paid);
        assert_eq!(state.draft.customer, None);
    }

    #[test]
    fn test_submit_request_follows_mode() {
        let create = InvoiceFormState::new(FormMode::Create);
        assert!(matches!(create.submit_request(), SubmitRequest::Create(_)));

        let mut edit = InvoiceFormState::new(FormMode::Edit(InvoiceId(12)));
        edit.apply_invoice(&invoice());
        match edit.submit_request() {
            SubmitRequest::Update(id, payload) => {
                assert_eq!(id, InvoiceId(12));
                assert_eq!(payload.customer.as_deref(), Some("/api/customers/5"));
                assert_eq!(payload.status, InvoiceStatus::Cancelled);
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_violations_map_to_field_errors() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.set_field("amount", "-5");
        let draft_before = state.draft.clone();

        let error = ApiError::Validation(vec![Violation::new("amount", "Amount must be positive")]);
        assert!(state.apply_submit_error(&error));

        assert_eq!(state.errors.len(), 1);
        assert_eq!(
            state.error_for(InvoiceField::Amount).as_deref(),
            Some("Amount must be positive")
        );
        assert_eq!(state.error_for(InvoiceField::Status), None);
        assert_eq!(state.draft, draft_before);
    }

    #[test]
    fn test_violations_replace_previous_errors() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.apply_submit_error(&ApiError::Validation(vec![Violation::new("amount", "a")]));
        state.apply_submit_error(&ApiError::Validation(vec![Violation::new("customer", "c")]));
        assert_eq!(state.error_for(InvoiceField::Amount), None);
        assert_eq!(state.error_for(InvoiceField::Customer).as_deref(), Some("c"));
    }

    #[test]
    fn test_unstructured_failure_is_not_mapped() {
        let mut state = InvoiceFormState::new(FormMode::Create);
        state.apply_submit_error(&ApiError::Validation(vec![Violation::new("amount", "a")]));

        let error = ApiError::Rejected { status: 500, detail: "boom".into() };
        assert!(!state.apply_submit_error(&error));
        assert!(!state.apply_submit_error(&ApiError::Transport("offline".into())));
        assert_eq!(state.error_for(InvoiceField::Amount).as_deref(), Some("a"));
    }
}

use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::shared::hydra::{page_count, HydraCollection};
use leptos::prelude::*;

use crate::domain::a001_customer::api::PageQuery;

/// Request for one page, tagged with the sequence number it was issued with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub query: PageQuery,
}

#[derive(Clone, Debug)]
pub struct CustomerListState {
    pub items: Vec<Customer>,
    pub total_items: usize,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub loading: bool,
    last_seq: u64,
}

impl CustomerListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            current_page: 1,
            page_size: page_size.max(1),
            loading: true,
            last_seq: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_items, self.page_size)
    }

    /// Switch to `page`; the page fetch is triggered by the index change.
    ///
    /// Returns `false` (and leaves the state alone) when `page` is already
    /// current, since no fetch would follow to clear the loading flag.
    pub fn change_page(&mut self, page: usize) -> bool {
        let page = page.max(1);
        if page == self.current_page {
            return false;
        }
        self.loading = true;
        self.current_page = page;
        true
    }

    /// Issue a request for the current page. Any request issued earlier
    /// becomes stale.
    pub fn begin_fetch(&mut self) -> PageRequest {
        self.last_seq += 1;
        self.loading = true;
        PageRequest {
            seq: self.last_seq,
            query: PageQuery::new(self.current_page, self.page_size),
        }
    }

    /// Apply a page response. Stale responses are dropped and `false` is returned.
    pub fn apply_page(&mut self, request: &PageRequest, envelope: HydraCollection<Customer>) -> bool {
        if request.seq != self.last_seq {
            return false;
        }
        self.total_items = envelope.total_items;
        self.items = envelope.into_items();
        self.loading = false;
        true
    }

    /// Remove the customer before the server confirms the deletion.
    ///
    /// Returns the list as it was, to be passed to [`Self::restore`] if the
    /// deletion fails; `None` if the customer is not displayed.
    pub fn remove_optimistic(&mut self, id: CustomerId) -> Option<Vec<Customer>> {
        if !self.items.iter().any(|c| c.id == id) {
            return None;
        }
        let snapshot = self.items.clone();
        self.items.retain(|c| c.id != id);
        Some(snapshot)
    }

    /// Put back the list captured by [`Self::remove_optimistic`], verbatim
    pub fn restore(&mut self, snapshot: Vec<Customer>) {
        self.items = snapshot;
    }
}

pub fn create_state(page_size: usize) -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::new(page_size))
}

/// What happened to a page response that arrived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    Applied,
    /// A newer request was issued meanwhile
    Stale,
    /// The list was unmounted while the request was in flight
    Closed,
}

pub fn apply_page_response(
    state: RwSignal<CustomerListState>,
    request: &PageRequest,
    envelope: HydraCollection<Customer>,
) -> PageOutcome {
    match state.try_update(|s| s.apply_page(request, envelope)) {
        Some(true) => PageOutcome::Applied,
        Some(false) => PageOutcome::Stale,
        None => PageOutcome::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, invoices: usize) -> Customer {
        let invoices: Vec<String> = (0..invoices).map(|i| format!("\"/api/invoices/{}\"", i)).collect();
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "firstName": "F{id}", "lastName": "L{id}", "email": "c{id}@example.com",
                "company": null, "invoices": [{}], "totalAmount": 0}}"#,
            invoices.join(",")
        ))
        .unwrap()
    }

    const PAGE_JSON: &str = r#"{
        "@context": "/api/contexts/Customer",
        "@id": "/api/customers",
        "@type": "hydra:Collection",
        "hydra:member": [
            {"@id": "/api/customers/11", "id": 11, "firstName": "Anne", "lastName": "Roux",
             "email": "anne@example.com", "company": null, "invoices": [], "totalAmount": 0},
            {"@id": "/api/customers/12", "id": 12, "firstName": "Paul", "lastName": "Blanc",
             "email": "paul@example.com", "company": "Blanc SA",
             "invoices": [{"id": 5, "amount": 120, "status": "PAID"}], "totalAmount": 120}
        ],
        "hydra:totalItems": 12
    }"#;

    fn ids(state: &CustomerListState) -> Vec<i64> {
        state.items.iter().map(|c| c.id.value()).collect()
    }

    fn loaded(ids: &[i64]) -> CustomerListState {
        let mut state = CustomerListState::new(10);
        let request = state.begin_fetch();
        let items = ids.iter().map(|&id| customer(id, 0)).collect();
        assert!(state.apply_page(&request, HydraCollection::new(items, 42)));
        state
    }

    #[test]
    fn test_initial_state_is_loading_first_page() {
        let mut state = CustomerListState::new(10);
        assert!(state.loading);
        let request = state.begin_fetch();
        assert_eq!(request.query, PageQuery::new(1, 10));
    }

    #[test]
    fn test_page_change_issues_one_request_for_that_page() {
        for page in [2usize, 3, 7] {
            let mut state = loaded(&[1, 2]);
            assert!(!state.loading);

            assert!(state.change_page(page));
            assert!(state.loading);
            let request = state.begin_fetch();
            assert_eq!(request.query, PageQuery::new(page, 10));
            assert!(state.loading);

            assert!(state.apply_page(&request, HydraCollection::new(vec![customer(99, 0)], 42)));
            assert!(!state.loading);
            assert_eq!(ids(&state), vec![99]);
            assert_eq!(state.current_page, page);
        }
    }

    #[test]
    fn test_change_to_current_page_is_noop() {
        let mut state = loaded(&[1]);
        assert!(!state.change_page(1));
        assert!(!state.loading);
        assert!(!state.change_page(0));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = loaded(&[1]);
        state.change_page(2);
        let slow = state.begin_fetch();
        state.change_page(3);
        let fast = state.begin_fetch();

        assert!(state.apply_page(&fast, HydraCollection::new(vec![customer(30, 0)], 42)));
        assert!(!state.apply_page(&slow, HydraCollection::new(vec![customer(20, 0)], 42)));
        assert_eq!(ids(&state), vec![30]);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_decoded_page_is_applied() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state(10);
            let request = state.try_update(|s| s.begin_fetch()).unwrap();
            let envelope: HydraCollection<Customer> = serde_json::from_str(PAGE_JSON).unwrap();

            assert_eq!(apply_page_response(state, &request, envelope), PageOutcome::Applied);
            state.with_untracked(|s| {
                assert_eq!(ids(s), vec![11, 12]);
                assert_eq!(s.total_pages(), 2);
                assert!(!s.loading);
            });
        });
    }

    #[test]
    fn test_page_response_outcomes() {
        let owner = Owner::new();
        let (state, first, second) = owner.with(|| {
            let state = create_state(10);
            let first = state.try_update(|s| s.begin_fetch()).unwrap();
            let second = state.try_update(|s| s.begin_fetch()).unwrap();
            (state, first, second)
        });

        let envelope = || serde_json::from_str::<HydraCollection<Customer>>(PAGE_JSON).unwrap();
        assert_eq!(apply_page_response(state, &first, envelope()), PageOutcome::Stale);
        assert_eq!(apply_page_response(state, &second, envelope()), PageOutcome::Applied);

        drop(owner);
        assert_eq!(apply_page_response(state, &second, envelope()), PageOutcome::Closed);
    }

    #[test]
    fn test_total_pages() {
        let state = loaded(&[1]);
        assert_eq!(state.total_items, 42);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_optimistic_delete_and_rollback() {
        let mut state = loaded(&[1, 2, 3, 4]);

        let snapshot = state.remove_optimistic(CustomerId(3)).unwrap();
        assert_eq!(ids(&state), vec![1, 2, 4]);

        state.restore(snapshot);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_delete_unknown_customer_changes_nothing() {
        let mut state = loaded(&[1, 2]);
        assert!(state.remove_optimistic(CustomerId(9)).is_none());
        assert_eq!(ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_customer_with_invoices_not_deletable() {
        assert!(!customer(1, 2).can_delete());
        assert!(customer(1, 0).can_delete());
    }
}

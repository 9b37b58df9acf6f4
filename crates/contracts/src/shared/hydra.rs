//! JSON-LD collection envelope
//!
//! Коллекции API приходят обёрнутыми: элементы текущей страницы лежат в
//! `hydra:member`, общее количество записей в `hydra:totalItems`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HydraCollection<T> {
    #[serde(rename = "hydra:member", default)]
    pub member: Vec<T>,

    #[serde(rename = "hydra:totalItems", default)]
    pub total_items: usize,
}

impl<T> HydraCollection<T> {
    pub fn new(member: Vec<T>, total_items: usize) -> Self {
        Self {
            member,
            total_items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.member
    }
}

/// `ceil(total / page_size)`, но не меньше одной страницы
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 || page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_hydra_keys() {
        let json = r#"{
            "@context": "/api/contexts/Customer",
            "@id": "/api/customers",
            "@type": "hydra:Collection",
            "hydra:member": [1, 2, 3],
            "hydra:totalItems": 23,
            "hydra:view": { "@id": "/api/customers?page=1" }
        }"#;
        let envelope: HydraCollection<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.member, vec![1, 2, 3]);
        assert_eq!(envelope.total_items, 23);
        assert_eq!(page_count(envelope.total_items, 10), 3);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let envelope: HydraCollection<i32> = serde_json::from_str("{}").unwrap();
        assert!(envelope.member.is_empty());
        assert_eq!(envelope.total_items, 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }
}

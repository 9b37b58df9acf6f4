use crate::domain::a002_invoice::aggregate::InvoiceId;
use crate::domain::common::aggregate_id::int_aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::enums::InvoiceStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

int_aggregate_id!(
    /// Уникальный идентификатор клиента
    CustomerId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент, как его отдаёт API
///
/// Локальная копия только для чтения; владелец данных сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,

    #[serde(default)]
    pub company: Option<String>,

    /// Счета клиента в порядке, заданном сервером
    #[serde(default)]
    pub invoices: Vec<InvoiceLink>,

    /// Сумма всех счетов (вычисляется на сервере)
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
}

impl Customer {
    /// "Имя Фамилия"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn invoice_count(&self) -> usize {
        self.invoices.len()
    }

    /// Удалять можно только клиента без счетов.
    ///
    /// Это подсказка для UI, окончательно решает сервер.
    pub fn can_delete(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }
}

/// Ссылка на счёт внутри клиента: IRI или встроенный объект,
/// в зависимости от групп сериализации на сервере
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceLink {
    Iri(String),
    Embedded(InvoiceSummary),
}

/// Краткие данные счёта, встроенные в клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub amount: f64,
    pub status: InvoiceStatus,

    #[serde(rename = "sentAt", default)]
    pub sent_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub chrono: Option<i64>,
}

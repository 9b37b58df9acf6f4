use crate::domain::a001_customer::aggregate::{Customer, CustomerId};
use crate::domain::common::aggregate_id::int_aggregate_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::InvoiceStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

int_aggregate_id!(
    /// Уникальный идентификатор счёта
    InvoiceId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Счёт, как его отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub customer: CustomerRef,

    #[serde(rename = "sentAt", default)]
    pub sent_at: Option<DateTime<Utc>>,

    /// Порядковый номер счёта у клиента
    #[serde(default)]
    pub chrono: Option<i64>,
}

impl Invoice {
    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer.id()
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "invoices"
    }

    fn list_name() -> &'static str {
        "Счета"
    }
}

/// Владелец счёта: обычно встроенный объект, но сервер может отдать и IRI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Embedded(InvoiceCustomer),
    Iri(String),
}

impl CustomerRef {
    pub fn id(&self) -> Option<CustomerId> {
        match self {
            CustomerRef::Embedded(c) => Some(c.id),
            CustomerRef::Iri(iri) => iri
                .rsplit('/')
                .next()
                .and_then(|tail| CustomerId::from_string(tail).ok()),
        }
    }

    /// Имя для таблиц; для IRI показываем саму ссылку
    pub fn display_name(&self) -> String {
        match self {
            CustomerRef::Embedded(c) => format!("{} {}", c.first_name, c.last_name),
            CustomerRef::Iri(iri) => iri.clone(),
        }
    }
}

/// Данные клиента, встроенные в счёт
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCustomer {
    pub id: CustomerId,

    #[serde(rename = "firstName", default)]
    pub first_name: String,

    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Поля формы счёта; имена совпадают с `propertyPath` в ответах сервера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    Amount,
    Customer,
    Status,
}

impl InvoiceField {
    pub fn name(&self) -> &'static str {
        match self {
            InvoiceField::Amount => "amount",
            InvoiceField::Customer => "customer",
            InvoiceField::Status => "status",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "amount" => Some(InvoiceField::Amount),
            "customer" => Some(InvoiceField::Customer),
            "status" => Some(InvoiceField::Status),
            _ => None,
        }
    }
}

/// Черновик счёта (локальная копия при создании/редактировании)
///
/// Сумма хранится так, как её ввёл пользователь: проверку делает сервер.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceDto {
    pub amount: String,
    pub customer: Option<CustomerId>,
    pub status: InvoiceStatus,
}

impl InvoiceDto {
    /// Заполнить черновик из загруженного счёта
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            amount: invoice.amount.to_string(),
            customer: invoice.customer_id(),
            status: invoice.status,
        }
    }

    /// Обновить одно поле значением из `<input>`/`<select>`.
    ///
    /// Возвращает `false`, если значение не удалось применить
    /// (неизвестный статус); остальные поля не трогаются.
    pub fn set_field(&mut self, field: InvoiceField, value: &str) -> bool {
        match field {
            InvoiceField::Amount => {
                self.amount = value.to_string();
                true
            }
            InvoiceField::Customer => {
                self.customer = CustomerId::from_string(value).ok();
                true
            }
            InvoiceField::Status => match InvoiceStatus::from_code(value) {
                Some(status) => {
                    self.status = status;
                    true
                }
                None => false,
            },
        }
    }

    /// Значение поля в виде строки для привязки к элементу формы
    pub fn field_value(&self, field: InvoiceField) -> String {
        match field {
            InvoiceField::Amount => self.amount.clone(),
            InvoiceField::Customer => self
                .customer
                .map(|id| id.as_string())
                .unwrap_or_default(),
            InvoiceField::Status => self.status.code().to_string(),
        }
    }

    /// Тело запроса POST/PUT
    pub fn to_payload(&self) -> InvoicePayload {
        let amount = match self.amount.trim().parse::<f64>() {
            Ok(value) => serde_json::Number::from_f64(value)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(self.amount.clone())),
            Err(_) => serde_json::Value::String(self.amount.clone()),
        };

        InvoicePayload {
            amount,
            status: self.status,
            customer: self.customer.map(Customer::iri),
        }
    }
}

/// Счёт в формате, который принимает API: клиент передаётся ссылкой IRI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayload {
    /// Число, если строка разбирается; иначе исходная строка, чтобы ошибку
    /// показал сервер
    pub amount: serde_json::Value,
    pub status: InvoiceStatus,
    pub customer: Option<String>,
}

//! Ошибки валидации, которые сервер возвращает при отказе в записи
//!
//! Формат тела ответа:
//! `{"violations": [{"propertyPath": "amount", "message": "..."}]}`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ошибка валидации одного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "propertyPath")]
    pub property_path: String,
    pub message: String,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

/// Тело ответа сервера с ошибками валидации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationList {
    pub violations: Vec<Violation>,
}

impl ViolationList {
    /// Пытается распознать тело ответа как список нарушений.
    ///
    /// `None`, если тело не JSON или в нём нет ключа `violations`.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<ViolationList>(body).ok()
    }
}

/// Сообщения об ошибках по именам полей формы
pub type FieldErrors = HashMap<String, String>;

/// Одна запись на каждое нарушение; при повторе поля побеждает последнее
pub fn to_field_errors(violations: &[Violation]) -> FieldErrors {
    violations
        .iter()
        .map(|v| (v.property_path.clone(), v.message.clone()))
        .collect()
}

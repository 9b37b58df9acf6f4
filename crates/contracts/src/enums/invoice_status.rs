use serde::{Deserialize, Serialize};

/// Статусы счёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    /// Новый счёт создаётся в этом статусе, пока пользователь не выберет другой
    #[default]
    Sent,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    /// Получить код статуса (как в API)
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Cancelled => "CANCELLED",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Sent => "Отправлен",
            InvoiceStatus::Paid => "Оплачен",
            InvoiceStatus::Cancelled => "Отменён",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Cancelled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SENT" => Some(InvoiceStatus::Sent),
            "PAID" => Some(InvoiceStatus::Paid),
            "CANCELLED" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sent() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Sent);
    }

    #[test]
    fn test_serde_uses_api_codes() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        let parsed: InvoiceStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Paid);
        assert!(serde_json::from_str::<InvoiceStatus>("\"DRAFT\"").is_err());
    }

    #[test]
    fn test_from_code_matches_code() {
        for status in InvoiceStatus::all() {
            assert_eq!(InvoiceStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(InvoiceStatus::from_code("sent"), None);
    }
}

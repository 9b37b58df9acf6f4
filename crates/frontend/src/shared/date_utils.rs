//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application

use chrono::{DateTime, Utc};

/// Format a timestamp to DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Same as [`format_date`], "-" when the value is missing
pub fn format_date_opt(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let dt: DateTime<Utc> = "2024-03-15T14:02:26.123Z".parse().unwrap();
        assert_eq!(format_date(&dt), "15.03.2024");
    }

    #[test]
    fn test_format_date_opt() {
        let dt: DateTime<Utc> = "2019-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_date_opt(Some(&dt)), "31.12.2019");
        assert_eq!(format_date_opt(None), "-");
    }
}

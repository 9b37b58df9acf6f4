//! Утилиты форматирования сумм для таблиц

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Пробел каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежное значение с 2 знаками после запятой и разделителем тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма в евро для колонок "Сумма"
pub fn format_euro(value: f64) -> String {
    format!("{} €", format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(1520.5), "1 520.50 €");
    }
}

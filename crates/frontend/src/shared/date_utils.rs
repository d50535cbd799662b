//! Форматирование дат и денег для таблиц и карточек

use chrono::NaiveDate;

/// ISO-дата ("2026-08-15" или "2026-08-15T14:02:26Z") -> "15.08.2026".
/// Невалидная строка возвращается как есть.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Денежная величина с пробелами-разделителями тысяч: 1234567.5 -> "1 234 567,50"
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-15"), "15.08.2026");
        assert_eq!(format_date("2026-08-15T14:02:26.123Z"), "15.08.2026");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.5), "1\u{a0}234\u{a0}567,50");
        assert_eq!(format_money(49.99), "49,99");
        assert_eq!(format_money(-100.0), "-100,00");
    }
}

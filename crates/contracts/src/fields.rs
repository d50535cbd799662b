//! Форматные проверки полей и числовая коэрция черновиков.
//!
//! Черновики хранят числа строками (пустой input — это `""`, а не `0`),
//! поэтому вся коэрция собрана здесь и выполняется только нормализатором.

/// Проверка e-mail по схеме `\S+@\S+\.\S+`
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, host)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || host.contains('@') {
        return false;
    }
    match host.rsplit_once('.') {
        Some((name, zone)) => !name.is_empty() && !zone.is_empty(),
        None => false,
    }
}

/// Убрать из номера пробелы, дефисы и скобки (ввод "+7 (912) 345-67-89")
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// Телефон в формате E.164: `^\+?[1-9]\d{1,14}$` после normalize_phone
pub fn is_valid_phone(value: &str) -> bool {
    let digits = normalize_phone(value);
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    if digits.len() < 2 || digits.len() > 15 {
        return false;
    }
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_digit())
}

/// Двухбуквенный код страны. Регистр не проверяем: UI поднимает регистр
/// на blur, а нормализатор — безусловно.
pub fn is_valid_country_code(value: &str) -> bool {
    value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Национальный ID: 5-20 латинских букв и цифр
pub fn is_valid_national_id(value: &str) -> bool {
    (5..=20).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Обязательная денежная величина: пустая строка трактуется как 0
pub fn parse_money(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("Некорректное число: {}", value))
}

/// Необязательная денежная величина: пустая строка — значение отсутствует.
/// Отсутствие цены со скидкой и нулевая цена — разные вещи.
pub fn parse_money_opt(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("Некорректное число: {}", value))
}

/// Целочисленное количество: пустая строка трактуется как 0
pub fn parse_quantity(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("Некорректное количество: {}", value))
}

/// Числовое поле заполнено корректно (или пусто)?
pub fn is_numeric_or_empty(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("ivan@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("ivan@example"));
        assert!(!is_valid_email("ivan example@mail.ru"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+79123456789"));
        assert!(is_valid_phone("+7 (912) 345-67-89"));
        assert!(is_valid_phone("79123456789"));
        assert!(!is_valid_phone("+0123"));
        assert!(!is_valid_phone("8"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("+7912345678901234567"));
    }

    #[test]
    fn test_country_code() {
        assert!(is_valid_country_code("RU"));
        assert!(is_valid_country_code("de"));
        assert!(!is_valid_country_code("RUS"));
        assert!(!is_valid_country_code("R1"));
        assert!(!is_valid_country_code(""));
    }

    #[test]
    fn test_national_id() {
        assert!(is_valid_national_id("AB12345"));
        assert!(!is_valid_national_id("AB1"));
        assert!(!is_valid_national_id("AB 12345"));
    }

    #[test]
    fn test_money_coercion() {
        assert_eq!(parse_money("49.99"), Ok(49.99));
        assert_eq!(parse_money(""), Ok(0.0));
        assert_eq!(parse_money("  "), Ok(0.0));
        assert!(parse_money("abc").is_err());

        assert_eq!(parse_money_opt(""), Ok(None));
        assert_eq!(parse_money_opt("10"), Ok(Some(10.0)));
        assert!(parse_money_opt("x").is_err());
    }

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(parse_quantity("10"), Ok(10));
        assert_eq!(parse_quantity(""), Ok(0));
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("1.5").is_err());
    }
}

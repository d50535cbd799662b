use std::collections::BTreeMap;

/// Карта ошибок валидации: путь поля -> сообщение.
///
/// Пути — dot-notation по wire-именам (camelCase): `name`,
/// `pricing.basePrice`, `emergencyContact.phone`. BTreeMap даёт стабильный
/// порядок обхода при отображении списка ошибок.
pub type ErrorMap = BTreeMap<String, String>;

/// Добавить ошибку, если условие нарушено
pub fn require(errors: &mut ErrorMap, ok: bool, path: &str, message: &str) {
    if !ok {
        errors.insert(path.to_string(), message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        let mut errors = ErrorMap::new();
        require(&mut errors, true, "name", "Обязательно");
        assert!(errors.is_empty());
        require(&mut errors, false, "name", "Обязательно");
        assert_eq!(errors.get("name").map(String::as_str), Some("Обязательно"));
    }
}

//! Общие типы доменных агрегатов

use serde::{Deserialize, Serialize};

use crate::fields;
use crate::forms::error_map::{require, ErrorMap};

/// Почтовый адрес в wire-формате
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub line1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub line2: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    /// Двухбуквенный код страны, всегда в верхнем регистре
    pub country_code: String,
}

/// Черновик адреса: свободный ввод, коэрция только при нормализации
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressDraft {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country_code: String,
}

impl AddressDraft {
    pub fn from_dto(dto: &AddressDto) -> Self {
        Self {
            line1: dto.line1.clone(),
            line2: dto.line2.clone(),
            city: dto.city.clone(),
            region: dto.region.clone(),
            postal_code: dto.postal_code.clone(),
            country_code: dto.country_code.clone(),
        }
    }

    /// Валидация с обязательными полями (филиалы).
    /// `prefix` — путь вложенного объекта в карте ошибок ("address").
    pub fn validate_required(&self, prefix: &str, errors: &mut ErrorMap) {
        require(
            errors,
            !self.line1.trim().is_empty(),
            &format!("{}.line1", prefix),
            "Адресная строка обязательна для заполнения",
        );
        require(
            errors,
            !self.city.trim().is_empty(),
            &format!("{}.city", prefix),
            "Город обязателен для заполнения",
        );
        require(
            errors,
            fields::is_valid_country_code(self.country_code.trim()),
            &format!("{}.countryCode", prefix),
            "Код страны — две латинские буквы",
        );
    }

    /// Валидация необязательного адреса: формат проверяем,
    /// только если поле заполнено
    pub fn validate_optional(&self, prefix: &str, errors: &mut ErrorMap) {
        let code = self.country_code.trim();
        require(
            errors,
            code.is_empty() || fields::is_valid_country_code(code),
            &format!("{}.countryCode", prefix),
            "Код страны — две латинские буквы",
        );
    }

    pub fn to_dto(&self) -> AddressDto {
        AddressDto {
            line1: self.line1.trim().to_string(),
            line2: self.line2.trim().to_string(),
            city: self.city.trim().to_string(),
            region: self.region.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country_code: self.country_code.trim().to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_address_errors() {
        let draft = AddressDraft::default();
        let mut errors = ErrorMap::new();
        draft.validate_required("address", &mut errors);
        assert!(errors.contains_key("address.line1"));
        assert!(errors.contains_key("address.city"));
        assert!(errors.contains_key("address.countryCode"));
    }

    #[test]
    fn test_country_code_uppercased_at_normalize() {
        let draft = AddressDraft {
            line1: "Тверская 1".into(),
            city: "Москва".into(),
            country_code: " ru ".into(),
            ..Default::default()
        };
        let mut errors = ErrorMap::new();
        draft.validate_required("address", &mut errors);
        assert!(errors.is_empty());
        assert_eq!(draft.to_dto().country_code, "RU");
    }
}

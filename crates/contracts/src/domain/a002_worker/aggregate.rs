use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::common::AddressDto;
use crate::list::{ColumnKind, FilterableRow, Searchable, Sortable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub relation: String,
}

/// Сотрудник в wire-формате. `password` присутствует только в теле
/// create-запроса, бэкенд его никогда не возвращает.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub birth_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub national_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(default)]
    pub address: AddressDto,
    #[serde(default)]
    pub emergency_contact: EmergencyContactDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Searchable for WorkerDto {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.phone.to_lowercase().contains(&needle)
            || self.position.to_lowercase().contains(&needle)
    }
}

impl FilterableRow for WorkerDto {
    fn column_kind(_column: &str) -> ColumnKind {
        ColumnKind::Text
    }

    fn text_value(&self, column: &str) -> Option<String> {
        match column {
            "firstName" => Some(self.first_name.clone()),
            "lastName" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "position" => Some(self.position.clone()),
            _ => None,
        }
    }

    fn number_value(&self, _column: &str) -> Option<f64> {
        None
    }
}

impl Sortable for WorkerDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "firstName" => self.first_name.cmp(&other.first_name),
            "email" => self.email.cmp(&other.email),
            "position" => self.position.cmp(&other.position),
            _ => self.last_name.cmp(&other.last_name),
        }
    }
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::common::AddressDto;
use crate::list::{ColumnKind, FilterableRow, Searchable, Sortable};

/// Филиал в wire-формате
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub address: AddressDto,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manager_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Searchable for BranchDto {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.address.city.to_lowercase().contains(&needle)
            || self.manager_name.to_lowercase().contains(&needle)
    }
}

impl FilterableRow for BranchDto {
    fn column_kind(_column: &str) -> ColumnKind {
        ColumnKind::Text
    }

    fn text_value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "city" => Some(self.address.city.clone()),
            "managerName" => Some(self.manager_name.clone()),
            "phone" => Some(self.phone.clone()),
            _ => None,
        }
    }

    fn number_value(&self, _column: &str) -> Option<f64> {
        None
    }
}

impl Sortable for BranchDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "city" => self.address.city.cmp(&other.address.city),
            "managerName" => self.manager_name.cmp(&other.manager_name),
            _ => self.name.cmp(&other.name),
        }
    }
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::list::{ColumnKind, FilterableRow, Searchable, Sortable};

/// Строка истории продаж
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub doc_number: String,
    /// ISO-дата документа
    pub date: String,
    pub customer: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
    pub status: String,
}

impl Searchable for SaleDto {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.doc_number.to_lowercase().contains(&needle)
            || self.customer.to_lowercase().contains(&needle)
            || self.product_name.to_lowercase().contains(&needle)
    }
}

impl FilterableRow for SaleDto {
    fn column_kind(column: &str) -> ColumnKind {
        match column {
            "quantity" | "unitPrice" | "total" => ColumnKind::Number,
            _ => ColumnKind::Text,
        }
    }

    fn text_value(&self, column: &str) -> Option<String> {
        match column {
            "docNumber" => Some(self.doc_number.clone()),
            "date" => Some(self.date.clone()),
            "customer" => Some(self.customer.clone()),
            "productName" => Some(self.product_name.clone()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }

    fn number_value(&self, column: &str) -> Option<f64> {
        match column {
            "quantity" => Some(self.quantity as f64),
            "unitPrice" => Some(self.unit_price),
            "total" => Some(self.total),
            _ => None,
        }
    }
}

impl Sortable for SaleDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "quantity" => self.quantity.cmp(&other.quantity),
            "unitPrice" => self
                .unit_price
                .partial_cmp(&other.unit_price)
                .unwrap_or(Ordering::Equal),
            "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
            "date" => self.date.cmp(&other.date),
            "customer" => self.customer.cmp(&other.customer),
            "status" => self.status.cmp(&other.status),
            _ => self.doc_number.cmp(&other.doc_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{apply_filter, ColumnFilter, FilterOperator};

    fn sale(doc: &str, price: f64) -> SaleDto {
        SaleDto {
            id: doc.to_string(),
            doc_number: doc.to_string(),
            date: "2026-08-01".to_string(),
            customer: "ООО Ромашка".to_string(),
            product_name: "Стул".to_string(),
            quantity: 1,
            unit_price: price,
            total: price,
            status: "paid".to_string(),
        }
    }

    #[test]
    fn test_unit_price_filter() {
        let rows = vec![sale("S-1", 99.0), sale("S-2", 100.0), sale("S-3", 149.5)];
        let filter = ColumnFilter {
            column: "unitPrice".to_string(),
            operator: FilterOperator::GreaterThan,
            value: "100".to_string(),
        };
        let filtered = apply_filter(rows, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].doc_number, "S-3");
    }
}

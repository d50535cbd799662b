use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::list::{ColumnKind, FilterableRow, Searchable, Sortable};

/// Цены товара. `sale_price`/`list_price` опциональны и при отсутствии
/// не попадают в payload: отсутствие цены со скидкой не равно нулевой цене.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDto {
    pub base_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    pub cost: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDto {
    pub track_quantity: bool,
    pub quantity: u32,
    pub low_stock_threshold: u32,
    pub allow_backorder: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionDto {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub long: String,
}

/// Изображение в wire-формате. Для слотов с прикреплённым бинарным файлом
/// `url` пуст: байты уходят отдельной multipart-частью.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub url: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantDto {
    pub name: String,
    pub options: Vec<String>,
}

/// Товар в wire-формате: и ответ бэкенда, и тело create/update запроса
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub barcode: String,
    #[serde(default)]
    pub description: DescriptionDto,
    pub pricing: PricingDto,
    pub inventory: InventoryDto,
    #[serde(default)]
    pub images: Vec<ImageDto>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDto>,
    #[serde(default)]
    pub variants: Vec<VariantDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Searchable for ProductDto {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.sku.to_lowercase().contains(&needle)
            || self.brand.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.barcode.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

impl FilterableRow for ProductDto {
    fn column_kind(column: &str) -> ColumnKind {
        match column {
            "basePrice" | "quantity" => ColumnKind::Number,
            _ => ColumnKind::Text,
        }
    }

    fn text_value(&self, column: &str) -> Option<String> {
        match column {
            "name" => Some(self.name.clone()),
            "sku" => Some(self.sku.clone()),
            "brand" => Some(self.brand.clone()),
            "category" => Some(self.category.clone()),
            _ => None,
        }
    }

    fn number_value(&self, column: &str) -> Option<f64> {
        match column {
            "basePrice" => Some(self.pricing.base_price),
            "quantity" => Some(f64::from(self.inventory.quantity)),
            _ => None,
        }
    }
}

impl Sortable for ProductDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => self.sku.cmp(&other.sku),
            "brand" => self.brand.cmp(&other.brand),
            "category" => self.category.cmp(&other.category),
            "basePrice" => self
                .pricing
                .base_price
                .partial_cmp(&other.pricing.base_price)
                .unwrap_or(Ordering::Equal),
            "quantity" => self.inventory.quantity.cmp(&other.inventory.quantity),
            _ => self.name.cmp(&other.name),
        }
    }
}

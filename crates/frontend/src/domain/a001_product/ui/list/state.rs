use contracts::domain::a001_product::ProductDto;
use contracts::list::{run_pipeline, ColumnFilter};

/// Снимок параметров списка товаров: поиск, активный фильтр, сортировка
#[derive(Clone, Debug)]
pub struct ProductListQuery {
    pub search: String,
    pub filter: Option<ColumnFilter>,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: None,
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

/// Видимые строки таблицы. Конвейер работает над полным снимком:
/// фильтрация на клиенте, без запросов к серверу.
pub fn visible_products(all: &[ProductDto], query: &ProductListQuery) -> Vec<ProductDto> {
    run_pipeline(
        all,
        &query.search,
        query.filter.as_ref(),
        &query.sort_field,
        query.sort_ascending,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{InventoryDto, PricingDto};
    use contracts::list::{ColumnKind, FilterOperator};

    fn product(name: &str, sku: &str, price: f64, quantity: u32) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            sku: sku.to_string(),
            category: "cat".to_string(),
            pricing: PricingDto {
                base_price: price,
                currency: "RUB".to_string(),
                ..Default::default()
            },
            inventory: InventoryDto {
                quantity,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_query_sorts_by_name() {
        let all = vec![
            product("Шкаф", "SHK-1", 10_000.0, 2),
            product("Стул", "STL-1", 2_500.0, 40),
        ];
        let visible = visible_products(&all, &ProductListQuery::default());
        assert_eq!(visible[0].name, "Стул");
    }

    #[test]
    fn test_price_filter_over_search_results() {
        let all = vec![
            product("Стол письменный", "STP-1", 8_000.0, 5),
            product("Стол обеденный", "STO-1", 3_000.0, 5),
            product("Шкаф", "SHK-1", 10_000.0, 2),
        ];
        let mut filter = ColumnFilter::for_column("basePrice", ColumnKind::Number);
        filter.operator = FilterOperator::GreaterThan;
        filter.value = "5000".to_string();
        let query = ProductListQuery {
            search: "стол".to_string(),
            filter: Some(filter),
            ..Default::default()
        };
        let visible = visible_products(&all, &query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "STP-1");
    }
}

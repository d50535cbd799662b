use contracts::domain::a004_sale::SaleDto;
use contracts::list::{run_pipeline, ColumnFilter};

/// Параметры таблицы продаж
#[derive(Clone, Debug)]
pub struct SalesQuery {
    pub search: String,
    pub filter: Option<ColumnFilter>,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SalesQuery {
    fn default() -> Self {
        // Свежие документы сверху
        Self {
            search: String::new(),
            filter: None,
            sort_field: "date".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn visible_sales(all: &[SaleDto], query: &SalesQuery) -> Vec<SaleDto> {
    run_pipeline(
        all,
        &query.search,
        query.filter.as_ref(),
        &query.sort_field,
        query.sort_ascending,
    )
}

/// Итог по видимым строкам: количество документов и сумма
pub fn totals(rows: &[SaleDto]) -> (usize, f64) {
    (rows.len(), rows.iter().map(|r| r.total).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::list::{ColumnKind, FilterOperator};

    fn sale(doc: &str, date: &str, price: f64) -> SaleDto {
        SaleDto {
            id: doc.to_string(),
            doc_number: doc.to_string(),
            date: date.to_string(),
            customer: "ООО Ромашка".to_string(),
            product_name: "Стул".to_string(),
            quantity: 2,
            unit_price: price,
            total: price * 2.0,
            status: "paid".to_string(),
        }
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let all = vec![
            sale("S-1", "2026-08-01", 100.0),
            sale("S-2", "2026-08-15", 100.0),
        ];
        let visible = visible_sales(&all, &SalesQuery::default());
        assert_eq!(visible[0].doc_number, "S-2");
    }

    #[test]
    fn test_unit_price_filter_drives_totals() {
        let all = vec![
            sale("S-1", "2026-08-01", 99.0),
            sale("S-2", "2026-08-02", 150.0),
            sale("S-3", "2026-08-03", 101.0),
        ];
        let mut filter = ColumnFilter::for_column("unitPrice", ColumnKind::Number);
        filter.operator = FilterOperator::GreaterThan;
        filter.value = "100".to_string();
        let query = SalesQuery {
            filter: Some(filter),
            ..Default::default()
        };
        let visible = visible_sales(&all, &query);
        let (count, sum) = totals(&visible);
        assert_eq!(count, 2);
        assert_eq!(sum, 502.0);
    }
}

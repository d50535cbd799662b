use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Тип колонки определяет доступные операторы фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Contains,
    Equals,
    GreaterThan,
    LessThan,
}

impl FilterOperator {
    /// Допустимые операторы для типа колонки. Первый в списке — дефолтный
    /// при смене колонки.
    pub fn options_for(kind: ColumnKind) -> &'static [FilterOperator] {
        match kind {
            ColumnKind::Text => &[FilterOperator::Contains, FilterOperator::Equals],
            ColumnKind::Number => &[
                FilterOperator::Equals,
                FilterOperator::GreaterThan,
                FilterOperator::LessThan,
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "содержит",
            FilterOperator::Equals => "=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "eq",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::LessThan => "lt",
        }
    }

    pub fn from_code(code: &str) -> Option<FilterOperator> {
        match code {
            "contains" => Some(FilterOperator::Contains),
            "eq" => Some(FilterOperator::Equals),
            "gt" => Some(FilterOperator::GreaterThan),
            "lt" => Some(FilterOperator::LessThan),
            _ => None,
        }
    }
}

/// Строка таблицы, пригодная для колоночного фильтра
pub trait FilterableRow {
    fn column_kind(column: &str) -> ColumnKind;
    fn text_value(&self, column: &str) -> Option<String>;
    fn number_value(&self, column: &str) -> Option<f64>;
}

/// Единственный активный фильтр: колонка + оператор + значение.
/// Это тройка, а не набор: одновременно активен ровно один фильтр.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl ColumnFilter {
    /// Смена колонки: оператор сбрасывается на дефолтный для типа колонки,
    /// значение очищается.
    pub fn for_column(column: &str, kind: ColumnKind) -> Self {
        Self {
            column: column.to_string(),
            operator: FilterOperator::options_for(kind)[0],
            value: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.column.is_empty() && !self.value.trim().is_empty()
    }
}

/// Фильтрует список по поисковому запросу (case-insensitive, мин. 3 символа)
pub fn apply_search<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().chars().count() < 3 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Применить активный колоночный фильтр
pub fn apply_filter<T: FilterableRow>(items: Vec<T>, filter: &ColumnFilter) -> Vec<T> {
    if !filter.is_active() {
        return items;
    }
    let value = filter.value.trim();
    match T::column_kind(&filter.column) {
        ColumnKind::Text => {
            let needle = value.to_lowercase();
            items
                .into_iter()
                .filter(|item| {
                    let Some(cell) = item.text_value(&filter.column) else {
                        return false;
                    };
                    let cell = cell.to_lowercase();
                    match filter.operator {
                        FilterOperator::Contains => cell.contains(&needle),
                        FilterOperator::Equals => cell == needle,
                        // Числовые операторы к текстовой колонке не применимы
                        _ => true,
                    }
                })
                .collect()
        }
        ColumnKind::Number => {
            let Ok(threshold) = value.parse::<f64>() else {
                return items;
            };
            items
                .into_iter()
                .filter(|item| {
                    let Some(cell) = item.number_value(&filter.column) else {
                        return false;
                    };
                    match filter.operator {
                        FilterOperator::Equals => cell == threshold,
                        FilterOperator::GreaterThan => cell > threshold,
                        FilterOperator::LessThan => cell < threshold,
                        FilterOperator::Contains => true,
                    }
                })
                .collect()
        }
    }
}

/// Полный конвейер списка: поиск -> колоночный фильтр -> сортировка.
/// Работает над снимком коллекции, исходный список не мутируется.
pub fn run_pipeline<T>(
    items: &[T],
    search: &str,
    filter: Option<&ColumnFilter>,
    sort_field: &str,
    ascending: bool,
) -> Vec<T>
where
    T: Searchable + FilterableRow + Sortable + Clone,
{
    let mut rows = apply_search(items.to_vec(), search);
    if let Some(filter) = filter {
        rows = apply_filter(rows, filter);
    }
    if !sort_field.is_empty() {
        sort_rows(&mut rows, sort_field, ascending);
    }
    rows
}

/// Сортирует список по указанному полю
pub fn sort_rows<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl FilterableRow for Row {
        fn column_kind(column: &str) -> ColumnKind {
            match column {
                "unitPrice" => ColumnKind::Number,
                _ => ColumnKind::Text,
            }
        }

        fn text_value(&self, column: &str) -> Option<String> {
            (column == "name").then(|| self.name.clone())
        }

        fn number_value(&self, column: &str) -> Option<f64> {
            (column == "unitPrice").then_some(self.price)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "unitPrice" => self
                    .price
                    .partial_cmp(&other.price)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Стол".into(), price: 250.0 },
            Row { name: "Стул".into(), price: 99.5 },
            Row { name: "Шкаф".into(), price: 101.0 },
            Row { name: "Полка".into(), price: 100.0 },
        ]
    }

    #[test]
    fn test_numeric_greater_than() {
        let filter = ColumnFilter {
            column: "unitPrice".to_string(),
            operator: FilterOperator::GreaterThan,
            value: "100".to_string(),
        };
        let filtered = apply_filter(rows(), &filter);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        // Ровно те строки, где цена строго больше 100, порядок не важен
        assert_eq!(names, vec!["Стол", "Шкаф"]);
    }

    #[test]
    fn test_numeric_less_than_and_equals() {
        let mut filter = ColumnFilter {
            column: "unitPrice".to_string(),
            operator: FilterOperator::LessThan,
            value: "100".to_string(),
        };
        assert_eq!(apply_filter(rows(), &filter).len(), 1);

        filter.operator = FilterOperator::Equals;
        assert_eq!(apply_filter(rows(), &filter)[0].name, "Полка");
    }

    #[test]
    fn test_text_contains_case_insensitive() {
        let filter = ColumnFilter {
            column: "name".to_string(),
            operator: FilterOperator::Contains,
            value: "сто".to_string(),
        };
        let filtered = apply_filter(rows(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Стол");
    }

    #[test]
    fn test_column_change_resets_operator_and_value() {
        let filter = ColumnFilter {
            column: "name".to_string(),
            operator: FilterOperator::Equals,
            value: "Стол".to_string(),
        };
        assert!(filter.is_active());

        let switched = ColumnFilter::for_column("unitPrice", ColumnKind::Number);
        assert_eq!(switched.operator, FilterOperator::Equals);
        assert!(switched.value.is_empty());
        assert!(!switched.is_active());
    }

    #[test]
    fn test_inactive_filter_passes_everything() {
        let filter = ColumnFilter::for_column("unitPrice", ColumnKind::Number);
        assert_eq!(apply_filter(rows(), &filter).len(), 4);
    }

    #[test]
    fn test_pipeline_search_then_filter_then_sort() {
        let filter = ColumnFilter {
            column: "unitPrice".to_string(),
            operator: FilterOperator::GreaterThan,
            value: "99".to_string(),
        };
        let visible = run_pipeline(&rows(), "", Some(&filter), "unitPrice", false);
        let names: Vec<&str> = visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Стол", "Шкаф", "Полка", "Стул"]);
    }

    #[test]
    fn test_search_min_length() {
        assert_eq!(apply_search(rows(), "ст").len(), 4);
        assert_eq!(apply_search(rows(), "сто").len(), 1);
    }
}

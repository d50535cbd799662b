//! Клиентский табличный конвейер: поиск -> колоночный фильтр -> сортировка.

pub mod filter;

pub use filter::{
    apply_filter, apply_search, run_pipeline, sort_rows, ColumnFilter, ColumnKind,
    FilterOperator, FilterableRow, Searchable, Sortable,
};

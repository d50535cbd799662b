use contracts::list::{ColumnFilter, ColumnKind, FilterOperator};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Колонка, доступная для фильтрации
#[derive(Debug, Clone, Copy)]
pub struct FilterColumn {
    pub code: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// Панель единственного активного фильтра: колонка + оператор + значение.
/// Смена колонки сбрасывает оператор на дефолтный для её типа и очищает
/// значение (см. ColumnFilter::for_column).
#[component]
pub fn FilterBar(
    columns: Vec<FilterColumn>,
    filter: RwSignal<Option<ColumnFilter>>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);

    let kind_of = move |code: &str| -> Option<ColumnKind> {
        columns
            .get_value()
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.kind)
    };

    let on_column_change = move |ev| {
        let code = event_target_value(&ev);
        if code.is_empty() {
            filter.set(None);
            return;
        }
        if let Some(kind) = kind_of(&code) {
            filter.set(Some(ColumnFilter::for_column(&code, kind)));
        }
    };

    let on_operator_change = move |ev| {
        let code = event_target_value(&ev);
        if let Some(operator) = FilterOperator::from_code(&code) {
            filter.update(|f| {
                if let Some(f) = f {
                    f.operator = operator;
                }
            });
        }
    };

    let on_value_input = move |ev| {
        let value = event_target_value(&ev);
        filter.update(|f| {
            if let Some(f) = f {
                f.value = value;
            }
        });
    };

    let operator_options = move || -> Vec<(FilterOperator, bool)> {
        match filter.get() {
            Some(active) => {
                let kind = kind_of(&active.column).unwrap_or(ColumnKind::Text);
                FilterOperator::options_for(kind)
                    .iter()
                    .map(|op| (*op, *op == active.operator))
                    .collect()
            }
            None => Vec::new(),
        }
    };

    view! {
        <div class="filter-bar">
            {icon("filter")}
            <select class="filter-bar__column" on:change=on_column_change>
                <option value="" selected=move || filter.get().is_none()>
                    "Без фильтра"
                </option>
                {columns
                    .get_value()
                    .iter()
                    .map(|column| {
                        let code = column.code;
                        view! {
                            <option
                                value=code
                                selected=move || {
                                    filter.get().map(|f| f.column == code).unwrap_or(false)
                                }
                            >
                                {column.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                filter
                    .get()
                    .map(|active| {
                        view! {
                            <select class="filter-bar__operator" on:change=on_operator_change>
                                {operator_options()
                                    .into_iter()
                                    .map(|(op, is_selected)| {
                                        view! {
                                            <option value=op.code() selected=is_selected>
                                                {op.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <input
                                class="filter-bar__value"
                                type="text"
                                placeholder="Значение"
                                prop:value=active.value.clone()
                                on:input=on_value_input
                            />
                        }
                    })
            }}
        </div>
    }
}

pub mod state;

use contracts::domain::a004_sale::SaleDto;
use contracts::list::{ColumnFilter, ColumnKind};
use leptos::prelude::*;

use self::state::{totals, visible_sales, SalesQuery};
use crate::shared::components::{FilterBar, FilterColumn};
use crate::shared::context::{use_request_context, RequestContext};
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::export::{export_to_csv, export_to_xlsx, open_print_view, TableExportable};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, SearchInput};

async fn fetch_sales(ctx: &RequestContext) -> Result<Vec<SaleDto>, String> {
    http::get_json(ctx, "/api/sales").await
}

impl TableExportable for SaleDto {
    fn headers() -> Vec<&'static str> {
        vec![
            "Документ",
            "Дата",
            "Покупатель",
            "Товар",
            "Кол-во",
            "Цена",
            "Сумма",
            "Статус",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.doc_number.clone(),
            self.date.clone(),
            self.customer.clone(),
            self.product_name.clone(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.total.to_string(),
            self.status.clone(),
        ]
    }
}

const FILTER_COLUMNS: [FilterColumn; 6] = [
    FilterColumn { code: "docNumber", label: "Документ", kind: ColumnKind::Text },
    FilterColumn { code: "customer", label: "Покупатель", kind: ColumnKind::Text },
    FilterColumn { code: "productName", label: "Товар", kind: ColumnKind::Text },
    FilterColumn { code: "status", label: "Статус", kind: ColumnKind::Text },
    FilterColumn { code: "unitPrice", label: "Цена", kind: ColumnKind::Number },
    FilterColumn { code: "total", label: "Сумма", kind: ColumnKind::Number },
];

fn status_label(status: &str) -> &str {
    match status {
        "paid" => "Оплачен",
        "pending" => "В обработке",
        "cancelled" => "Отменён",
        "refunded" => "Возврат",
        other => other,
    }
}

/// История продаж: read-only таблица с конвейером поиск/фильтр/сортировка
#[component]
pub fn SalesList() -> impl IntoView {
    let ctx = use_request_context();

    let (all_items, set_all_items) = signal(Vec::<SaleDto>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let filter = RwSignal::new(Option::<ColumnFilter>::None);
    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    {
        let ctx = ctx.clone();
        set_is_loading.set(true);
        leptos::task::spawn_local(async move {
            match fetch_sales(&ctx).await {
                Ok(data) => set_all_items.set(data),
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    }

    let visible = move || {
        let query = SalesQuery {
            search: search.get(),
            filter: filter.get(),
            sort_field: sort_field.get(),
            sort_ascending: sort_ascending.get(),
        };
        visible_sales(&all_items.get(), &query)
    };

    let handle_csv = move |_| {
        if let Err(e) = export_to_csv(&visible(), "sales.csv") {
            set_error.set(Some(e));
        }
    };
    let handle_xlsx = move |_| {
        if let Err(e) = export_to_xlsx(&visible(), "sales.xlsx") {
            set_error.set(Some(e));
        }
    };
    let handle_print = move |_| {
        if let Err(e) = open_print_view(&visible(), "История продаж") {
            set_error.set(Some(e));
        }
    };

    let header_cell = move |field: &'static str, title: &'static str| {
        view! {
            <th
                class="sortable"
                on:click=create_sort_toggle(
                    field,
                    sort_field.into(),
                    set_sort_field,
                    set_sort_ascending,
                )
            >
                {title}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <div class="list-container sales-list">
            <div class="list-header">
                <h3>"История продаж"</h3>
                <div class="list-actions">
                    <button class="btn btn-secondary" on:click=handle_csv title="Экспорт в CSV">
                        {icon("download")}
                        "CSV"
                    </button>
                    <button class="btn btn-secondary" on:click=handle_xlsx title="Экспорт в XLSX">
                        {icon("download")}
                        "XLSX"
                    </button>
                    <button class="btn btn-secondary" on:click=handle_print title="Печать">
                        {icon("print")}
                    </button>
                </div>
            </div>

            <div class="list-toolbar">
                <SearchInput
                    on_change=Callback::new(move |v| set_search.set(v))
                    placeholder="Документ, покупатель или товар..."
                />
                <FilterBar columns=FILTER_COLUMNS.to_vec() filter=filter />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                if is_loading.get() {
                    return view! { <div class="loading">"Загрузка..."</div> }.into_any();
                }
                let rows = visible();
                if rows.is_empty() {
                    return view! { <div class="empty-state">"Ничего не найдено"</div> }
                        .into_any();
                }
                let (count, sum) = totals(&rows);
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                {header_cell("docNumber", "Документ")}
                                {header_cell("date", "Дата")}
                                {header_cell("customer", "Покупатель")}
                                <th>"Товар"</th>
                                {header_cell("quantity", "Кол-во")}
                                {header_cell("unitPrice", "Цена")}
                                {header_cell("total", "Сумма")}
                                {header_cell("status", "Статус")}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .iter()
                                .map(|item| {
                                    view! {
                                        <tr>
                                            <td class="mono">{item.doc_number.clone()}</td>
                                            <td>{format_date(&item.date)}</td>
                                            <td>{item.customer.clone()}</td>
                                            <td>{item.product_name.clone()}</td>
                                            <td class="number">{item.quantity}</td>
                                            <td class="number">
                                                {format_money(item.unit_price)}
                                            </td>
                                            <td class="number">{format_money(item.total)}</td>
                                            <td>
                                                <span class=format!(
                                                    "status-badge status-badge--{}",
                                                    item.status,
                                                )>
                                                    {status_label(&item.status).to_string()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td colspan="6">{format!("Документов: {}", count)}</td>
                                <td class="number">{format_money(sum)}</td>
                                <td></td>
                            </tr>
                        </tfoot>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}

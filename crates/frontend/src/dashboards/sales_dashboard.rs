use std::collections::BTreeMap;

use contracts::domain::a001_product::ProductDto;
use contracts::domain::a004_sale::SaleDto;
use leptos::prelude::*;

use crate::shared::components::{StatCard, StatFormat};
use crate::shared::context::{use_request_context, RequestContext};
use crate::shared::date_utils::format_money;
use crate::shared::http;
use crate::shared::icons::icon;

/// KPI по набору продаж
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesKpis {
    pub revenue: f64,
    pub documents: usize,
    pub units: u64,
    pub avg_check: f64,
}

pub fn sales_kpis(rows: &[SaleDto]) -> SalesKpis {
    let revenue: f64 = rows.iter().map(|r| r.total).sum();
    let documents = rows.len();
    let units: u64 = rows.iter().map(|r| u64::from(r.quantity)).sum();
    let avg_check = if documents > 0 {
        revenue / documents as f64
    } else {
        0.0
    };
    SalesKpis {
        revenue,
        documents,
        units,
        avg_check,
    }
}

/// Топ товаров по выручке: (наименование, штук, выручка)
pub fn top_products(rows: &[SaleDto], limit: usize) -> Vec<(String, u64, f64)> {
    let mut grouped: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = grouped.entry(row.product_name.as_str()).or_default();
        entry.0 += u64::from(row.quantity);
        entry.1 += row.total;
    }
    let mut items: Vec<(String, u64, f64)> = grouped
        .into_iter()
        .map(|(name, (units, revenue))| (name.to_string(), units, revenue))
        .collect();
    items.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    items.truncate(limit);
    items
}

/// Товары с остатком не выше порога
pub fn low_stock(products: &[ProductDto]) -> Vec<ProductDto> {
    products
        .iter()
        .filter(|p| {
            p.inventory.track_quantity && p.inventory.quantity <= p.inventory.low_stock_threshold
        })
        .cloned()
        .collect()
}

/// Дашборд продаж. Секции грузятся независимо: сбой одной не валит
/// остальные.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let ctx = use_request_context();

    let (sales, set_sales) = signal(Option::<Vec<SaleDto>>::None);
    let (sales_error, set_sales_error) = signal(Option::<String>::None);
    let (products, set_products) = signal(Option::<Vec<ProductDto>>::None);
    let (products_error, set_products_error) = signal(Option::<String>::None);

    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            match http::get_json::<Vec<SaleDto>>(&ctx, "/api/sales").await {
                Ok(data) => set_sales.set(Some(data)),
                Err(e) => {
                    log::error!("Дашборд: продажи не загружены: {}", e);
                    set_sales_error.set(Some(e));
                }
            }
        });
    }
    {
        let ctx: RequestContext = ctx.clone();
        leptos::task::spawn_local(async move {
            match http::get_json::<Vec<ProductDto>>(&ctx, "/api/products").await {
                Ok(data) => set_products.set(Some(data)),
                Err(e) => {
                    log::error!("Дашборд: товары не загружены: {}", e);
                    set_products_error.set(Some(e));
                }
            }
        });
    }

    let kpis = Signal::derive(move || sales.get().map(|rows| sales_kpis(&rows)));
    let revenue = Signal::derive(move || kpis.get().map(|k| k.revenue));
    let documents = Signal::derive(move || kpis.get().map(|k| k.documents as f64));
    let units = Signal::derive(move || kpis.get().map(|k| k.units as f64));
    let avg_check = Signal::derive(move || kpis.get().map(|k| k.avg_check));

    view! {
        <div class="dashboard sales-dashboard">
            <div class="dashboard__header">
                <h3>"Дашборд продаж"</h3>
            </div>

            <section class="dashboard__section">
                {move || sales_error.get().map(|e| view! {
                    <div class="error">{format!("Продажи недоступны: {}", e)}</div>
                })}
                <div class="stat-cards">
                    <StatCard
                        label="Выручка".to_string()
                        icon_name="receipt"
                        value=revenue
                        format=StatFormat::Money
                    />
                    <StatCard
                        label="Документов".to_string()
                        icon_name="chart"
                        value=documents
                        format=StatFormat::Integer
                    />
                    <StatCard
                        label="Продано штук".to_string()
                        icon_name="box"
                        value=units
                        format=StatFormat::Integer
                    />
                    <StatCard
                        label="Средний чек".to_string()
                        icon_name="receipt"
                        value=avg_check
                        format=StatFormat::Money
                    />
                </div>
            </section>

            <section class="dashboard__section">
                <h4>"Топ товаров по выручке"</h4>
                {move || match sales.get() {
                    None => view! { <div class="loading">"Загрузка..."</div> }.into_any(),
                    Some(rows) => {
                        let top = top_products(&rows, 5);
                        if top.is_empty() {
                            return view! { <div class="empty-state">"Нет продаж"</div> }
                                .into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Товар"</th>
                                        <th>"Штук"</th>
                                        <th>"Выручка"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {top
                                        .into_iter()
                                        .map(|(name, qty, revenue)| view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td class="number">{qty}</td>
                                                <td class="number">{format_money(revenue)}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="dashboard__section">
                <h4>"Заканчиваются на складе"</h4>
                {move || products_error.get().map(|e| view! {
                    <div class="error">{format!("Остатки недоступны: {}", e)}</div>
                })}
                {move || match products.get() {
                    None => view! { <div class="loading">"Загрузка..."</div> }.into_any(),
                    Some(items) => {
                        let short = low_stock(&items);
                        if short.is_empty() {
                            return view! {
                                <div class="empty-state">
                                    {icon("check")}
                                    "Дефицита нет"
                                </div>
                            }
                                .into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Товар"</th>
                                        <th>"Артикул"</th>
                                        <th>"Остаток"</th>
                                        <th>"Порог"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {short
                                        .into_iter()
                                        .map(|p| view! {
                                            <tr>
                                                <td>{p.name.clone()}</td>
                                                <td class="mono">{p.sku.clone()}</td>
                                                <td class="number low-stock">
                                                    {p.inventory.quantity}
                                                </td>
                                                <td class="number">
                                                    {p.inventory.low_stock_threshold}
                                                </td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(product: &str, quantity: u32, total: f64) -> SaleDto {
        SaleDto {
            id: "s".to_string(),
            doc_number: "S-1".to_string(),
            date: "2026-08-01".to_string(),
            customer: "ООО Ромашка".to_string(),
            product_name: product.to_string(),
            quantity,
            unit_price: total / quantity as f64,
            total,
            status: "paid".to_string(),
        }
    }

    #[test]
    fn test_kpis_over_empty_set() {
        let kpis = sales_kpis(&[]);
        assert_eq!(kpis.documents, 0);
        assert_eq!(kpis.avg_check, 0.0);
    }

    #[test]
    fn test_kpis_aggregation() {
        let rows = vec![sale("Стул", 2, 5000.0), sale("Стол", 1, 10_000.0)];
        let kpis = sales_kpis(&rows);
        assert_eq!(kpis.revenue, 15_000.0);
        assert_eq!(kpis.documents, 2);
        assert_eq!(kpis.units, 3);
        assert_eq!(kpis.avg_check, 7_500.0);
    }

    #[test]
    fn test_top_products_grouped_and_ordered() {
        let rows = vec![
            sale("Стул", 2, 5000.0),
            sale("Стол", 1, 10_000.0),
            sale("Стул", 1, 2500.0),
        ];
        let top = top_products(&rows, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "Стол");
        assert_eq!(top[1], ("Стул".to_string(), 3, 7500.0));
    }
}

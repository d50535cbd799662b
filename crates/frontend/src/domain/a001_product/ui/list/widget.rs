use contracts::domain::a001_product::ProductDto;
use contracts::list::{ColumnFilter, ColumnKind};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::state::{visible_products, ProductListQuery};
use crate::shared::components::{FilterBar, FilterColumn};
use crate::shared::context::{use_request_context, RequestContext};
use crate::shared::date_utils::format_money;
use crate::shared::export::{export_to_csv, export_to_xlsx, open_print_view, TableExportable};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, SearchInput};
use crate::shared::modal::{ConfirmDialog, Modal};

async fn fetch_products(ctx: &RequestContext) -> Result<Vec<ProductDto>, String> {
    http::get_json(ctx, "/api/products").await
}

async fn delete_product(ctx: &RequestContext, id: &str) -> Result<(), String> {
    http::delete(ctx, &format!("/api/products/{}", id)).await
}

impl TableExportable for ProductDto {
    fn headers() -> Vec<&'static str> {
        vec![
            "Наименование",
            "Артикул",
            "Бренд",
            "Категория",
            "Базовая цена",
            "Остаток",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sku.clone(),
            self.brand.clone(),
            self.category.clone(),
            self.pricing.base_price.to_string(),
            self.inventory.quantity.to_string(),
        ]
    }
}

const FILTER_COLUMNS: [FilterColumn; 6] = [
    FilterColumn { code: "name", label: "Наименование", kind: ColumnKind::Text },
    FilterColumn { code: "sku", label: "Артикул", kind: ColumnKind::Text },
    FilterColumn { code: "brand", label: "Бренд", kind: ColumnKind::Text },
    FilterColumn { code: "category", label: "Категория", kind: ColumnKind::Text },
    FilterColumn { code: "basePrice", label: "Базовая цена", kind: ColumnKind::Number },
    FilterColumn { code: "quantity", label: "Остаток", kind: ColumnKind::Number },
];

/// Список товаров: клиентский поиск/фильтр/сортировка, экспорт видимых строк
#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_request_context();

    let (all_items, set_all_items) = signal(Vec::<ProductDto>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let filter = RwSignal::new(Option::<ColumnFilter>::None);
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    // id + имя товара, ожидающего подтверждения удаления
    let (pending_delete, set_pending_delete) = signal(Option::<(String, String)>::None);
    // id строки с раскрытым контекстным меню
    let (open_menu, set_open_menu) = signal(Option::<String>::None);
    let (quick_view, set_quick_view) = signal(Option::<ProductDto>::None);

    let location = use_location();
    // Путь списка фиксирован на время жизни страницы
    let base_path = location.pathname.get_untracked();
    let add_href = format!("{}/add", base_path);

    let load = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            set_is_loading.set(true);
            set_error.set(None);
            leptos::task::spawn_local(async move {
                match fetch_products(&ctx).await {
                    Ok(data) => set_all_items.set(data),
                    Err(e) => set_error.set(Some(e)),
                }
                set_is_loading.set(false);
            });
        }
    };
    load();

    let visible = move || {
        let query = ProductListQuery {
            search: search.get(),
            filter: filter.get(),
            sort_field: sort_field.get(),
            sort_ascending: sort_ascending.get(),
        };
        visible_products(&all_items.get(), &query)
    };

    let handle_csv = move |_| {
        if let Err(e) = export_to_csv(&visible(), "products.csv") {
            set_error.set(Some(e));
        }
    };
    let handle_xlsx = move |_| {
        if let Err(e) = export_to_xlsx(&visible(), "products.xlsx") {
            set_error.set(Some(e));
        }
    };
    let handle_print = move |_| {
        if let Err(e) = open_print_view(&visible(), "Товары") {
            set_error.set(Some(e));
        }
    };

    let confirm_delete = {
        let ctx = ctx.clone();
        let load = load.clone();
        move |_| {
            let Some((id, _)) = pending_delete.get_untracked() else {
                return;
            };
            set_pending_delete.set(None);
            let ctx = ctx.clone();
            let load = load.clone();
            leptos::task::spawn_local(async move {
                match delete_product(&ctx, &id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
                }
            });
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
        <div class="list-container product-list">
            <div class="list-header">
                <h3>"Товары"</h3>
                <div class="list-actions">
                    <A attr:class="btn btn-primary" href=add_href>
                        {icon("plus")}
                        "Добавить"
                    </A>
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
                <SearchInput on_change=Callback::new(move |v| set_search.set(v)) />
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
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                {header_cell("name", "Наименование")}
                                {header_cell("sku", "Артикул")}
                                {header_cell("brand", "Бренд")}
                                {header_cell("category", "Категория")}
                                {header_cell("basePrice", "Цена")}
                                {header_cell("quantity", "Остаток")}
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|item| {
                                    let id = item.id.clone().unwrap_or_default();
                                    let edit_href =
                                        format!("{}/{}/edit", base_path, id);
                                    let delete_name = item.name.clone();
                                    let low_stock = item.inventory.track_quantity
                                        && item.inventory.quantity
                                            <= item.inventory.low_stock_threshold;
                                    let menu_id = id.clone();
                                    let row_id = id.clone();
                                    let row_item = item.clone();
                                    view! {
                                        <tr>
                                            <td>{item.name.clone()}</td>
                                            <td class="mono">{item.sku.clone()}</td>
                                            <td>{item.brand.clone()}</td>
                                            <td>{item.category.clone()}</td>
                                            <td class="number">
                                                {format_money(item.pricing.base_price)}
                                            </td>
                                            <td class="number" class:low-stock=low_stock>
                                                {item.inventory.quantity}
                                            </td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn-icon"
                                                    title="Действия"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        let target = menu_id.clone();
                                                        set_open_menu.update(|open| {
                                                            *open = if open.as_deref()
                                                                == Some(target.as_str())
                                                            {
                                                                None
                                                            } else {
                                                                Some(target)
                                                            };
                                                        });
                                                    }
                                                >
                                                    {icon("dots")}
                                                </button>
                                                {move || {
                                                    (open_menu.get().as_deref()
                                                        == Some(row_id.as_str()))
                                                        .then(|| {
                                                            let view_item = row_item.clone();
                                                            let del_id = row_id.clone();
                                                            let del_name = delete_name.clone();
                                                            let edit_href = edit_href.clone();
                                                            view! {
                                                                <div class="row-menu">
                                                                    <button
                                                                        class="row-menu__item"
                                                                        on:click=move |_| {
                                                                            set_open_menu.set(None);
                                                                            set_quick_view
                                                                                .set(Some(
                                                                                    view_item.clone(),
                                                                                ));
                                                                        }
                                                                    >
                                                                        {icon("eye")}
                                                                        "Просмотр"
                                                                    </button>
                                                                    <A
                                                                        attr:class="row-menu__item"
                                                                        href=edit_href
                                                                    >
                                                                        {icon("edit")}
                                                                        "Редактировать"
                                                                    </A>
                                                                    <button
                                                                        class="row-menu__item row-menu__item--danger"
                                                                        on:click=move |_| {
                                                                            set_open_menu.set(None);
                                                                            set_pending_delete
                                                                                .set(Some((
                                                                                    del_id.clone(),
                                                                                    del_name.clone(),
                                                                                )));
                                                                        }
                                                                    >
                                                                        {icon("trash")}
                                                                        "Удалить"
                                                                    </button>
                                                                </div>
                                                            }
                                                        })
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}

            {move || {
                pending_delete
                    .get()
                    .map(|(_, name)| {
                        view! {
                            <ConfirmDialog
                                message=format!("Удалить товар \"{}\"?", name)
                                on_confirm=Callback::new(confirm_delete.clone())
                                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                            />
                        }
                    })
            }}

            {move || {
                quick_view
                    .get()
                    .map(|item| {
                        let brand = if item.brand.is_empty() {
                            "—".to_string()
                        } else {
                            item.brand.clone()
                        };
                        let barcode = if item.barcode.is_empty() {
                            "—".to_string()
                        } else {
                            item.barcode.clone()
                        };
                        let sale_price = item
                            .pricing
                            .sale_price
                            .map(format_money)
                            .unwrap_or_else(|| "—".to_string());
                        let stock = if item.inventory.track_quantity {
                            item.inventory.quantity.to_string()
                        } else {
                            "не отслеживается".to_string()
                        };
                        let tags = if item.tags.is_empty() {
                            "—".to_string()
                        } else {
                            item.tags.join(", ")
                        };
                        view! {
                            <Modal
                                title=item.name.clone()
                                on_close=Callback::new(move |_| set_quick_view.set(None))
                            >
                                <dl class="quick-view">
                                    <dt>"Артикул"</dt>
                                    <dd class="mono">{item.sku.clone()}</dd>
                                    <dt>"Бренд"</dt>
                                    <dd>{brand}</dd>
                                    <dt>"Категория"</dt>
                                    <dd>{item.category.clone()}</dd>
                                    <dt>"Штрихкод"</dt>
                                    <dd class="mono">{barcode}</dd>
                                    <dt>"Базовая цена"</dt>
                                    <dd>
                                        {format_money(item.pricing.base_price)}
                                        " "
                                        {item.pricing.currency.clone()}
                                    </dd>
                                    <dt>"Цена со скидкой"</dt>
                                    <dd>{sale_price}</dd>
                                    <dt>"Остаток"</dt>
                                    <dd>{stock}</dd>
                                    <dt>"Теги"</dt>
                                    <dd>{tags}</dd>
                                </dl>
                                {(!item.description.short.is_empty())
                                    .then(|| view! {
                                        <p class="quick-view__description">
                                            {item.description.short.clone()}
                                        </p>
                                    })}
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

use contracts::domain::a002_worker::WorkerDto;
use contracts::list::{run_pipeline, ColumnFilter, ColumnKind};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::components::{FilterBar, FilterColumn};
use crate::shared::context::{use_request_context, RequestContext};
use crate::shared::export::{export_to_csv, export_to_xlsx, open_print_view, TableExportable};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, SearchInput};
use crate::shared::modal::ConfirmDialog;

async fn fetch_workers(ctx: &RequestContext) -> Result<Vec<WorkerDto>, String> {
    http::get_json(ctx, "/api/workers").await
}

async fn delete_worker(ctx: &RequestContext, id: &str) -> Result<(), String> {
    http::delete(ctx, &format!("/api/workers/{}", id)).await
}

impl TableExportable for WorkerDto {
    fn headers() -> Vec<&'static str> {
        vec!["Фамилия", "Имя", "E-mail", "Телефон", "Должность"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.last_name.clone(),
            self.first_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.position.clone(),
        ]
    }
}

const FILTER_COLUMNS: [FilterColumn; 4] = [
    FilterColumn { code: "lastName", label: "Фамилия", kind: ColumnKind::Text },
    FilterColumn { code: "email", label: "E-mail", kind: ColumnKind::Text },
    FilterColumn { code: "phone", label: "Телефон", kind: ColumnKind::Text },
    FilterColumn { code: "position", label: "Должность", kind: ColumnKind::Text },
];

#[component]
pub fn WorkerList() -> impl IntoView {
    let ctx = use_request_context();

    let (all_items, set_all_items) = signal(Vec::<WorkerDto>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let filter = RwSignal::new(Option::<ColumnFilter>::None);
    let (sort_field, set_sort_field) = signal("lastName".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let (pending_delete, set_pending_delete) = signal(Option::<(String, String)>::None);

    let base_path = use_location().pathname.get_untracked();
    let add_href = format!("{}/add", base_path);

    let load = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            set_is_loading.set(true);
            set_error.set(None);
            leptos::task::spawn_local(async move {
                match fetch_workers(&ctx).await {
                    Ok(data) => set_all_items.set(data),
                    Err(e) => set_error.set(Some(e)),
                }
                set_is_loading.set(false);
            });
        }
    };
    load();

    let visible = move || {
        run_pipeline(
            &all_items.get(),
            &search.get(),
            filter.get().as_ref(),
            &sort_field.get(),
            sort_ascending.get(),
        )
    };

    let handle_csv = move |_| {
        if let Err(e) = export_to_csv(&visible(), "workers.csv") {
            set_error.set(Some(e));
        }
    };
    let handle_xlsx = move |_| {
        if let Err(e) = export_to_xlsx(&visible(), "workers.xlsx") {
            set_error.set(Some(e));
        }
    };
    let handle_print = move |_| {
        if let Err(e) = open_print_view(&visible(), "Сотрудники") {
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
                match delete_worker(&ctx, &id).await {
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
        <div class="list-container worker-list">
            <div class="list-header">
                <h3>"Сотрудники"</h3>
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

            {
                let base_path = base_path.clone();
                move || {
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
                                    {header_cell("lastName", "Фамилия")}
                                    {header_cell("firstName", "Имя")}
                                    {header_cell("email", "E-mail")}
                                    <th>"Телефон"</th>
                                    {header_cell("position", "Должность")}
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone().unwrap_or_default();
                                        let edit_href = format!("{}/{}/edit", base_path, id);
                                        let display_name =
                                            format!("{} {}", item.last_name, item.first_name);
                                        view! {
                                            <tr>
                                                <td>{item.last_name.clone()}</td>
                                                <td>{item.first_name.clone()}</td>
                                                <td>{item.email.clone()}</td>
                                                <td class="mono">{item.phone.clone()}</td>
                                                <td>{item.position.clone()}</td>
                                                <td class="row-actions">
                                                    <A
                                                        attr:class="btn-icon"
                                                        attr:title="Редактировать"
                                                        href=edit_href
                                                    >
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="btn-icon"
                                                        title="Удалить"
                                                        on:click=move |_| {
                                                            set_pending_delete
                                                                .set(Some((
                                                                    id.clone(),
                                                                    display_name.clone(),
                                                                )))
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }

            {move || {
                pending_delete
                    .get()
                    .map(|(_, name)| {
                        view! {
                            <ConfirmDialog
                                message=format!("Удалить сотрудника \"{}\"?", name)
                                on_confirm=Callback::new(confirm_delete.clone())
                                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

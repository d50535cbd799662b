use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::context::use_request_context;
use crate::shared::icons::icon;

struct NavItem {
    path: &'static str,
    title: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "dashboard", title: "Дашборд", icon: "chart" },
    NavItem { path: "products", title: "Товары", icon: "box" },
    NavItem { path: "sales", title: "Продажи", icon: "receipt" },
    NavItem { path: "workers", title: "Сотрудники", icon: "users" },
    NavItem { path: "branches", title: "Филиалы", icon: "store" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let locale = use_request_context().locale;

    view! {
        <nav class="sidebar">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let href = format!("/{}/{}", locale, item.path);
                    view! {
                        <A href=href attr:class="sidebar__item">
                            {icon(item.icon)}
                            <span>{item.title}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

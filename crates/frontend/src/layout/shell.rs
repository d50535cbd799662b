use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::shared::context::use_request_context;

/// Каркас консоли: шапка, боковая навигация, рабочая область
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_request_context();

    view! {
        <div class="shell">
            <header class="shell-header">
                <span class="shell-header__brand">"Розница.Консоль"</span>
                <span class="shell-header__session">
                    {format!("{} · {}", ctx.company_id, ctx.user_id)}
                </span>
            </header>
            <div class="shell-body">
                <aside class="shell-sidebar">
                    <Sidebar />
                </aside>
                <main class="shell-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;

/// Формат значения KPI-карточки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    Money,
    Integer,
}

/// KPI-карточка дашборда. `value == None` — данные ещё грузятся
/// либо секция деградировала.
#[component]
pub fn StatCard(
    label: String,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    format: StatFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => match format {
            StatFormat::Money => format_money(v),
            StatFormat::Integer => format!("{}", v as i64),
        },
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

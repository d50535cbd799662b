use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::context::use_request_context;
use crate::shared::icons::icon;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "box",
        title: "Каталог товаров",
        text: "Карточки с ценами, остатками, изображениями и вариантами. \
               Пошаговый мастер не даст сохранить неполную карточку.",
    },
    Feature {
        icon: "receipt",
        title: "История продаж",
        text: "Поиск, фильтры по любой колонке и выгрузка в CSV или на печать.",
    },
    Feature {
        icon: "chart",
        title: "Дашборд",
        text: "Выручка, средний чек и дефицит склада на одном экране.",
    },
    Feature {
        icon: "users",
        title: "Сотрудники и филиалы",
        text: "Онбординг сотрудников и учёт торговых точек в той же консоли.",
    },
];

/// Маркетинговый лендинг. Единственная страница вне оболочки консоли.
#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_request_context().locale;
    let console_href = format!("/{}/dashboard", locale);

    view! {
        <div class="landing">
            <header class="landing__hero">
                <h1>"Розница.Консоль"</h1>
                <p class="landing__subtitle">
                    "Каталог, остатки и продажи вашей розницы — в одном окне браузера."
                </p>
                <A attr:class="btn btn-primary landing__cta" href=console_href>
                    "Открыть консоль"
                    {icon("arrow-right")}
                </A>
            </header>

            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|f| view! {
                        <div class="landing__feature">
                            <div class="landing__feature-icon">{icon(f.icon)}</div>
                            <h3>{f.title}</h3>
                            <p>{f.text}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <footer class="landing__footer">
                <span>"© 2026 Розница.Консоль"</span>
            </footer>
        </div>
    }
}

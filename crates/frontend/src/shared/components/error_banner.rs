use leptos::prelude::*;

/// Баннер серверной ошибки. Черновик и шаг при этом не теряются —
/// пользователь исправляет данные и отправляет повторно.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <div class="error-banner">{text}</div> })
    }
}

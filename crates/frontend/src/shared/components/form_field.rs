use leptos::prelude::*;

/// Поле формы: подпись, контрол и inline-ошибка валидации
#[component]
pub fn FormField(
    label: String,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group" class:form-group--invalid=move || error.get().is_some()>
            <label>
                {label}
                {required.then(|| view! { <span class="form-group__required">"*"</span> })}
            </label>
            {children()}
            {move || error.get().map(|text| view! { <div class="field-error">{text}</div> })}
        </div>
    }
}

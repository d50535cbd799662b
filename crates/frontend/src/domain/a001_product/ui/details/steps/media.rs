use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;

/// Шаг "Изображения и теги"
#[component]
pub fn MediaStep(vm: ProductDetailsViewModel) -> impl IntoView {
    let tag_input = RwSignal::new(String::new());

    let add_tag = move || {
        let value = tag_input.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        vm.form.update(|s| s.draft.add_tag(&value));
        tag_input.set(String::new());
    };

    let on_files_selected = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file_list) = input.files() else {
            return;
        };
        let mut files = Vec::with_capacity(file_list.length() as usize);
        for i in 0..file_list.length() {
            if let Some(file) = file_list.item(i) {
                files.push(file);
            }
        }
        if !files.is_empty() {
            vm.add_files(files);
        }
        // Сбрасываем input, чтобы повторный выбор того же файла сработал
        input.set_value("");
    };

    view! {
        <div class="form-step">
            <div class="form-group">
                <label class="file-picker">
                    {icon("plus")}
                    "Добавить изображения"
                    <input
                        type="file"
                        accept="image/*"
                        multiple=true
                        style="display: none"
                        on:change=on_files_selected
                    />
                </label>
            </div>

            <div class="image-gallery">
                <For
                    each=move || 0..vm.form.get().draft.images.len()
                    key=|i| *i
                    children=move |i| {
                        let image = move || vm.form.get().draft.images.get(i).cloned();
                        view! {
                            <div
                                class="image-card"
                                class:image-card--primary=move || {
                                    image().map(|img| img.is_primary).unwrap_or(false)
                                }
                            >
                                <img src=move || image().map(|img| img.url).unwrap_or_default() />
                                {move || {
                                    image()
                                        .and_then(|img| img.pending_file)
                                        .map(|f| view! {
                                            <span class="image-card__pending">{f.name}</span>
                                        })
                                }}
                                <div class="image-card__actions">
                                    <button
                                        class="btn-icon"
                                        title="Сделать основным"
                                        on:click=move |_| vm.set_primary(i)
                                    >
                                        {icon("star")}
                                    </button>
                                    <button
                                        class="btn-icon"
                                        title="Удалить"
                                        on:click=move |_| vm.remove_image(i)
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label>"Теги"</label>
                <div class="tag-editor">
                    <input
                        type="text"
                        placeholder="Новый тег"
                        prop:value=move || tag_input.get()
                        on:input=move |ev| tag_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                add_tag();
                            }
                        }
                    />
                    <button class="btn btn-secondary btn-sm" on:click=move |_| add_tag()>
                        "Добавить"
                    </button>
                </div>
                <div class="tag-list">
                    <For
                        each=move || vm.form.get().draft.tags
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let remove_value = tag.clone();
                            view! {
                                <span class="tag-chip">
                                    {tag}
                                    <button
                                        class="tag-chip__remove"
                                        on:click=move |_| {
                                            let value = remove_value.clone();
                                            vm.form.update(|s| s.draft.remove_tag(&value));
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

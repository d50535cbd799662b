use contracts::domain::a001_product::{AttributeDraft, VariantDraft};
use leptos::prelude::*;

use super::super::view_model::ProductDetailsViewModel;
use super::field_error;
use crate::shared::components::FormField;
use crate::shared::icons::icon;

/// Шаг "Основное": идентификация товара и описание
#[component]
pub fn GeneralStep(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <FormField label="Наименование".to_string() error=field_error(vm, "name") required=true>
                <input
                    type="text"
                    prop:value=move || vm.form.get().draft.name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|s| s.update_field("name", |d| d.name = value));
                    }
                />
            </FormField>

            <div class="form-row">
                <FormField label="Бренд".to_string() error=field_error(vm, "brand")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.brand
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("brand", |d| d.brand = value));
                        }
                    />
                </FormField>
                <FormField label="Категория".to_string() error=field_error(vm, "category") required=true>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.category
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("category", |d| d.category = value));
                        }
                    />
                </FormField>
            </div>

            <div class="form-row">
                <FormField label="Артикул (SKU)".to_string() error=field_error(vm, "sku")>
                    <input
                        type="text"
                        placeholder="Пусто — сгенерируется автоматически"
                        prop:value=move || vm.form.get().draft.sku
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("sku", |d| d.sku = value));
                        }
                    />
                </FormField>
                <FormField label="Штрихкод".to_string() error=field_error(vm, "barcode")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.barcode
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("barcode", |d| d.barcode = value));
                        }
                    />
                </FormField>
            </div>

            <FormField label="Краткое описание".to_string() error=field_error(vm, "description.short")>
                <textarea
                    rows="2"
                    prop:value=move || vm.form.get().draft.description.short
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|s| {
                            s.update_field("description.short", |d| d.description.short = value)
                        });
                    }
                ></textarea>
            </FormField>
            <FormField label="Полное описание".to_string() error=field_error(vm, "description.long")>
                <textarea
                    rows="5"
                    prop:value=move || vm.form.get().draft.description.long
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|s| {
                            s.update_field("description.long", |d| d.description.long = value)
                        });
                    }
                ></textarea>
            </FormField>

            <AttributesEditor vm=vm />
            <VariantsEditor vm=vm />
        </div>
    }
}

/// Произвольные характеристики: пары имя/значение
#[component]
fn AttributesEditor(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="repeater">
            <div class="repeater__header">
                <h4>"Характеристики"</h4>
                <button
                    class="btn btn-secondary btn-sm"
                    on:click=move |_| {
                        vm.form.update(|s| s.draft.attributes.push(AttributeDraft::default()))
                    }
                >
                    {icon("plus")}
                    "Добавить"
                </button>
            </div>
            <For
                each=move || 0..vm.form.get().draft.attributes.len()
                key=|i| *i
                children=move |i| {
                    view! {
                        <div class="repeater__row">
                            <input
                                type="text"
                                placeholder="Название"
                                prop:value=move || {
                                    vm.form
                                        .get()
                                        .draft
                                        .attributes
                                        .get(i)
                                        .map(|a| a.name.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|s| {
                                        if let Some(attr) = s.draft.attributes.get_mut(i) {
                                            attr.name = value;
                                        }
                                    });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Значение"
                                prop:value=move || {
                                    vm.form
                                        .get()
                                        .draft
                                        .attributes
                                        .get(i)
                                        .map(|a| a.value.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|s| {
                                        if let Some(attr) = s.draft.attributes.get_mut(i) {
                                            attr.value = value;
                                        }
                                    });
                                }
                            />
                            <button
                                class="btn-icon"
                                title="Удалить"
                                on:click=move |_| {
                                    vm.form.update(|s| {
                                        if i < s.draft.attributes.len() {
                                            s.draft.attributes.remove(i);
                                        }
                                    })
                                }
                            >
                                {icon("trash")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Варианты: название опции и значения через запятую
#[component]
fn VariantsEditor(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="repeater">
            <div class="repeater__header">
                <h4>"Варианты"</h4>
                <button
                    class="btn btn-secondary btn-sm"
                    on:click=move |_| {
                        vm.form.update(|s| s.draft.variants.push(VariantDraft::default()))
                    }
                >
                    {icon("plus")}
                    "Добавить"
                </button>
            </div>
            <For
                each=move || 0..vm.form.get().draft.variants.len()
                key=|i| *i
                children=move |i| {
                    view! {
                        <div class="repeater__row">
                            <input
                                type="text"
                                placeholder="Опция (например, Цвет)"
                                prop:value=move || {
                                    vm.form
                                        .get()
                                        .draft
                                        .variants
                                        .get(i)
                                        .map(|v| v.name.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|s| {
                                        if let Some(variant) = s.draft.variants.get_mut(i) {
                                            variant.name = value;
                                        }
                                    });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Значения через запятую"
                                prop:value=move || {
                                    vm.form
                                        .get()
                                        .draft
                                        .variants
                                        .get(i)
                                        .map(|v| v.options.clone())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|s| {
                                        if let Some(variant) = s.draft.variants.get_mut(i) {
                                            variant.options = value;
                                        }
                                    });
                                }
                            />
                            <button
                                class="btn-icon"
                                title="Удалить"
                                on:click=move |_| {
                                    vm.form.update(|s| {
                                        if i < s.draft.variants.len() {
                                            s.draft.variants.remove(i);
                                        }
                                    })
                                }
                            >
                                {icon("trash")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

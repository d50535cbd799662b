use leptos::prelude::*;

use super::super::view_model::ProductDetailsViewModel;
use super::field_error;
use crate::shared::components::FormField;

/// Шаг "Остатки"
#[component]
pub fn InventoryStep(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().draft.inventory.track_quantity
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|s| {
                                s.update_field("inventory.trackQuantity", |d| {
                                    d.inventory.track_quantity = checked
                                })
                            });
                        }
                    />
                    "Вести учёт остатков"
                </label>
            </div>

            <div class="form-row">
                <FormField
                    label="Остаток".to_string()
                    error=field_error(vm, "inventory.quantity")
                    required=true
                >
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || vm.form.get().draft.inventory.quantity
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("inventory.quantity", |d| {
                                    d.inventory.quantity = value
                                })
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Порог низкого остатка".to_string()
                    error=field_error(vm, "inventory.lowStockThreshold")
                >
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || vm.form.get().draft.inventory.low_stock_threshold
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("inventory.lowStockThreshold", |d| {
                                    d.inventory.low_stock_threshold = value
                                })
                            });
                        }
                    />
                </FormField>
            </div>

            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().draft.inventory.allow_backorder
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|s| {
                                s.update_field("inventory.allowBackorder", |d| {
                                    d.inventory.allow_backorder = checked
                                })
                            });
                        }
                    />
                    "Разрешить продажу под заказ"
                </label>
            </div>
        </div>
    }
}

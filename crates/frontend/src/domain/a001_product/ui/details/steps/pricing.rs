use leptos::prelude::*;

use super::super::view_model::ProductDetailsViewModel;
use super::field_error;
use crate::shared::components::FormField;

const CURRENCIES: [&str; 3] = ["RUB", "USD", "EUR"];

/// Шаг "Цены". Все денежные поля — строки до нормализации:
/// пустой input не равен нулю.
#[component]
pub fn PricingStep(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-row">
                <FormField
                    label="Базовая цена".to_string()
                    error=field_error(vm, "pricing.basePrice")
                    required=true
                >
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || vm.form.get().draft.pricing.base_price
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("pricing.basePrice", |d| d.pricing.base_price = value)
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Цена со скидкой".to_string()
                    error=field_error(vm, "pricing.salePrice")
                >
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || vm.form.get().draft.pricing.sale_price
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("pricing.salePrice", |d| d.pricing.sale_price = value)
                            });
                        }
                    />
                </FormField>
            </div>

            <div class="form-row">
                <FormField
                    label="Цена до скидки".to_string()
                    error=field_error(vm, "pricing.listPrice")
                >
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || vm.form.get().draft.pricing.list_price
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("pricing.listPrice", |d| d.pricing.list_price = value)
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Себестоимость".to_string()
                    error=field_error(vm, "pricing.cost")
                >
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || vm.form.get().draft.pricing.cost
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("pricing.cost", |d| d.pricing.cost = value)
                            });
                        }
                    />
                </FormField>
            </div>

            <FormField label="Валюта".to_string() error=field_error(vm, "pricing.currency")>
                <select
                    prop:value=move || {
                        let currency = vm.form.get().draft.pricing.currency;
                        if currency.is_empty() { "RUB".to_string() } else { currency }
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|s| {
                            s.update_field("pricing.currency", |d| d.pricing.currency = value)
                        });
                    }
                >
                    {CURRENCIES
                        .iter()
                        .map(|code| view! { <option value=*code>{*code}</option> })
                        .collect_view()}
                </select>
            </FormField>
        </div>
    }
}

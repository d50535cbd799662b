use contracts::domain::a003_branch::{BranchDraft, STEP_ADDRESS, STEP_GENERAL};
use contracts::forms::{MultiStepDraft, SubmissionPhase};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use super::view_model::BranchDetailsViewModel;
use crate::routes::routes::list_route_from_form_path;
use crate::shared::components::{ErrorBanner, FormField, WizardHeader};
use crate::shared::context::use_request_context;
use crate::shared::icons::icon;

fn field_error(vm: BranchDetailsViewModel, path: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || vm.form.get().error_for(path).map(str::to_string))
}

#[component]
pub fn BranchDetailsPage() -> impl IntoView {
    let ctx = use_request_context();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));

    let vm = BranchDetailsViewModel::new();
    vm.load_if_needed(ctx.clone(), id);

    let navigate = use_navigate();
    let location = use_location();
    let pathname = location.pathname;

    let to_list = {
        let navigate = navigate.clone();
        move || {
            let path = pathname.get_untracked();
            navigate(&list_route_from_form_path(&path), Default::default());
        }
    };
    let on_saved = {
        let to_list = to_list.clone();
        Callback::new(move |_| to_list())
    };
    let on_cancel = to_list.clone();

    let server_error = Signal::derive(move || match vm.phase.get() {
        SubmissionPhase::Failed(message) => Some(message),
        _ => None,
    });
    let current_step = Signal::derive(move || vm.form.get().current_step);

    view! {
        <div class="details-container branch-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        "Редактирование филиала"
                    } else {
                        "Новый филиал"
                    }}
                </h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ErrorBanner message=server_error />
            {move || (vm.phase.get() == SubmissionPhase::Success).then(|| view! {
                <div class="success-banner">
                    {icon("check")}
                    "Филиал сохранён"
                </div>
            })}

            <WizardHeader steps=BranchDraft::steps() current_step=current_step />

            <div class="details-form">
                {move || match vm.form.get().current_step {
                    STEP_GENERAL => view! { <GeneralStep vm=vm /> }.into_any(),
                    STEP_ADDRESS => view! { <AddressStep vm=vm /> }.into_any(),
                    _ => view! { <></> }.into_any(),
                }}
            </div>

            <div class="details-actions">
                {move || (current_step.get() > 0).then(|| view! {
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| vm.form.update(|s| s.back())
                    >
                        {icon("arrow-left")}
                        "Назад"
                    </button>
                })}
                {move || (!vm.form.get().is_last_step()).then(|| view! {
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.form.update(|s| { s.next(); })
                    >
                        "Далее"
                        {icon("arrow-right")}
                    </button>
                })}
                {
                    let ctx = ctx.clone();
                    move || {
                        let ctx = ctx.clone();
                        vm.form.get().is_last_step().then(|| view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || vm.phase.get().is_busy()
                                on:click=move |_| vm.save_command(ctx.clone(), on_saved)
                            >
                                {icon("save")}
                                {move || if vm.phase.get().is_busy() {
                                    "Сохранение..."
                                } else {
                                    "Сохранить"
                                }}
                            </button>
                        })
                    }
                }
                <button class="btn btn-secondary" on:click=move |_| on_cancel()>
                    "Отмена"
                </button>
            </div>
        </div>
    }
}

#[component]
fn GeneralStep(vm: BranchDetailsViewModel) -> impl IntoView {
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
                <FormField label="Телефон".to_string() error=field_error(vm, "phone")>
                    <input
                        type="tel"
                        prop:value=move || vm.form.get().draft.phone
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("phone", |d| d.phone = value));
                        }
                    />
                </FormField>
                <FormField label="E-mail".to_string() error=field_error(vm, "email")>
                    <input
                        type="email"
                        prop:value=move || vm.form.get().draft.email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("email", |d| d.email = value));
                        }
                    />
                </FormField>
            </div>
            <FormField label="Управляющий".to_string() error=field_error(vm, "managerName")>
                <input
                    type="text"
                    prop:value=move || vm.form.get().draft.manager_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form
                            .update(|s| s.update_field("managerName", |d| d.manager_name = value));
                    }
                />
            </FormField>
        </div>
    }
}

#[component]
fn AddressStep(vm: BranchDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <FormField
                label="Адресная строка".to_string()
                error=field_error(vm, "address.line1")
                required=true
            >
                <input
                    type="text"
                    prop:value=move || vm.form.get().draft.address.line1
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form
                            .update(|s| s.update_field("address.line1", |d| d.address.line1 = value));
                    }
                />
            </FormField>
            <FormField label="Дополнение".to_string() error=field_error(vm, "address.line2")>
                <input
                    type="text"
                    prop:value=move || vm.form.get().draft.address.line2
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form
                            .update(|s| s.update_field("address.line2", |d| d.address.line2 = value));
                    }
                />
            </FormField>
            <div class="form-row">
                <FormField
                    label="Город".to_string()
                    error=field_error(vm, "address.city")
                    required=true
                >
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.address.city
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form
                                .update(|s| s.update_field("address.city", |d| d.address.city = value));
                        }
                    />
                </FormField>
                <FormField label="Регион".to_string() error=field_error(vm, "address.region")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.address.region
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("address.region", |d| d.address.region = value)
                            });
                        }
                    />
                </FormField>
            </div>
            <div class="form-row">
                <FormField label="Индекс".to_string() error=field_error(vm, "address.postalCode")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.address.postal_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("address.postalCode", |d| {
                                    d.address.postal_code = value
                                })
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Код страны".to_string()
                    error=field_error(vm, "address.countryCode")
                    required=true
                >
                    <input
                        type="text"
                        maxlength="2"
                        placeholder="RU"
                        prop:value=move || vm.form.get().draft.address.country_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("address.countryCode", |d| {
                                    d.address.country_code = value
                                })
                            });
                        }
                        on:blur=move |_| {
                            vm.form.update(|s| {
                                s.draft.address.country_code =
                                    s.draft.address.country_code.to_uppercase();
                            });
                        }
                    />
                </FormField>
            </div>
        </div>
    }
}

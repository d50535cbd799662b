use contracts::domain::a002_worker::{WorkerDraft, STEP_ACCOUNT, STEP_CONTACT, STEP_PERSONAL};
use contracts::forms::{MultiStepDraft, SubmissionPhase};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use super::view_model::WorkerDetailsViewModel;
use crate::routes::routes::list_route_from_form_path;
use crate::shared::components::{ErrorBanner, FormField, WizardHeader};
use crate::shared::context::use_request_context;
use crate::shared::icons::icon;

fn field_error(vm: WorkerDetailsViewModel, path: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || vm.form.get().error_for(path).map(str::to_string))
}

#[component]
pub fn WorkerDetailsPage() -> impl IntoView {
    let ctx = use_request_context();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));

    let vm = WorkerDetailsViewModel::new();
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
        <div class="details-container worker-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        "Редактирование сотрудника"
                    } else {
                        "Новый сотрудник"
                    }}
                </h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ErrorBanner message=server_error />
            {move || (vm.phase.get() == SubmissionPhase::Success).then(|| view! {
                <div class="success-banner">
                    {icon("check")}
                    "Сотрудник сохранён"
                </div>
            })}

            <WizardHeader steps=WorkerDraft::steps() current_step=current_step />

            <div class="details-form">
                {move || match vm.form.get().current_step {
                    STEP_PERSONAL => view! { <PersonalStep vm=vm /> }.into_any(),
                    STEP_CONTACT => view! { <ContactStep vm=vm /> }.into_any(),
                    STEP_ACCOUNT => view! { <AccountStep vm=vm /> }.into_any(),
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
fn PersonalStep(vm: WorkerDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-row">
                <FormField label="Имя".to_string() error=field_error(vm, "firstName") required=true>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.first_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("firstName", |d| d.first_name = value));
                        }
                    />
                </FormField>
                <FormField label="Фамилия".to_string() error=field_error(vm, "lastName") required=true>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.last_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("lastName", |d| d.last_name = value));
                        }
                    />
                </FormField>
            </div>

            <div class="form-row">
                <FormField label="Пол".to_string() error=field_error(vm, "gender") required=true>
                    <select
                        prop:value=move || vm.form.get().draft.gender
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("gender", |d| d.gender = value));
                        }
                    >
                        <option value="">"—"</option>
                        <option value="m">"Мужской"</option>
                        <option value="f">"Женский"</option>
                    </select>
                </FormField>
                <FormField label="Дата рождения".to_string() error=field_error(vm, "birthDate")>
                    <input
                        type="date"
                        prop:value=move || vm.form.get().draft.birth_date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("birthDate", |d| d.birth_date = value));
                        }
                    />
                </FormField>
            </div>

            <div class="form-row">
                <FormField label="Документ (ID)".to_string() error=field_error(vm, "nationalId")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.national_id
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form
                                .update(|s| s.update_field("nationalId", |d| d.national_id = value));
                        }
                    />
                </FormField>
                <FormField label="Должность".to_string() error=field_error(vm, "position")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.position
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("position", |d| d.position = value));
                        }
                    />
                </FormField>
            </div>
        </div>
    }
}

#[component]
fn ContactStep(vm: WorkerDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-row">
                <FormField label="E-mail".to_string() error=field_error(vm, "email") required=true>
                    <input
                        type="email"
                        prop:value=move || vm.form.get().draft.email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("email", |d| d.email = value));
                        }
                    />
                </FormField>
                <FormField label="Телефон".to_string() error=field_error(vm, "phone") required=true>
                    <input
                        type="tel"
                        placeholder="+7 912 345-67-89"
                        prop:value=move || vm.form.get().draft.phone
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| s.update_field("phone", |d| d.phone = value));
                        }
                    />
                </FormField>
            </div>

            <h4>"Адрес"</h4>
            <FormField label="Адресная строка".to_string() error=field_error(vm, "address.line1")>
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
            <div class="form-row">
                <FormField label="Город".to_string() error=field_error(vm, "address.city")>
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
                <FormField
                    label="Код страны".to_string()
                    error=field_error(vm, "address.countryCode")
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

            <h4>"Экстренный контакт"</h4>
            <div class="form-row">
                <FormField label="Имя".to_string() error=field_error(vm, "emergencyContact.name")>
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.emergency_contact.name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("emergencyContact.name", |d| {
                                    d.emergency_contact.name = value
                                })
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Телефон".to_string()
                    error=field_error(vm, "emergencyContact.phone")
                >
                    <input
                        type="tel"
                        prop:value=move || vm.form.get().draft.emergency_contact.phone
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("emergencyContact.phone", |d| {
                                    d.emergency_contact.phone = value
                                })
                            });
                        }
                    />
                </FormField>
                <FormField
                    label="Кем приходится".to_string()
                    error=field_error(vm, "emergencyContact.relation")
                >
                    <input
                        type="text"
                        prop:value=move || vm.form.get().draft.emergency_contact.relation
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|s| {
                                s.update_field("emergencyContact.relation", |d| {
                                    d.emergency_contact.relation = value
                                })
                            });
                        }
                    />
                </FormField>
            </div>
        </div>
    }
}

#[component]
fn AccountStep(vm: WorkerDetailsViewModel) -> impl IntoView {
    view! {
        <div class="form-step">
            {move || {
                if vm.is_edit_mode() {
                    // При редактировании пароль не меняется через эту форму
                    view! {
                        <p class="form-note">
                            "Смена пароля выполняется через сброс доступа."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="form-row">
                            <FormField
                                label="Пароль".to_string()
                                error=field_error(vm, "password")
                                required=true
                            >
                                <input
                                    type="password"
                                    prop:value=move || vm.form.get().draft.password
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.form.update(|s| {
                                            s.update_field("password", |d| d.password = value)
                                        });
                                    }
                                />
                            </FormField>
                            <FormField
                                label="Повтор пароля".to_string()
                                error=field_error(vm, "passwordConfirm")
                                required=true
                            >
                                <input
                                    type="password"
                                    prop:value=move || vm.form.get().draft.password_confirm
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.form.update(|s| {
                                            s.update_field("passwordConfirm", |d| {
                                                d.password_confirm = value
                                            })
                                        });
                                    }
                                />
                            </FormField>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

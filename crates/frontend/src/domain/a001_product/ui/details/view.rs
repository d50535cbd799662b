use contracts::domain::a001_product::{
    ProductDraft, STEP_GENERAL, STEP_INVENTORY, STEP_MEDIA, STEP_PRICING,
};
use contracts::forms::{MultiStepDraft, SubmissionPhase};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use super::steps::{GeneralStep, InventoryStep, MediaStep, PricingStep};
use super::view_model::ProductDetailsViewModel;
use crate::routes::routes::list_route_from_form_path;
use crate::shared::components::{ErrorBanner, WizardHeader};
use crate::shared::context::use_request_context;
use crate::shared::icons::icon;

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let ctx = use_request_context();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));

    let vm = ProductDetailsViewModel::new();
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
        <div class="details-container product-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        "Редактирование товара"
                    } else {
                        "Новый товар"
                    }}
                </h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ErrorBanner message=server_error />
            {move || (vm.phase.get() == SubmissionPhase::Success).then(|| view! {
                <div class="success-banner">
                    {icon("check")}
                    "Товар сохранён"
                </div>
            })}

            <WizardHeader steps=ProductDraft::steps() current_step=current_step />

            <div class="details-form">
                {move || match vm.form.get().current_step {
                    STEP_GENERAL => view! { <GeneralStep vm=vm /> }.into_any(),
                    STEP_PRICING => view! { <PricingStep vm=vm /> }.into_any(),
                    STEP_INVENTORY => view! { <InventoryStep vm=vm /> }.into_any(),
                    STEP_MEDIA => view! { <MediaStep vm=vm /> }.into_any(),
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

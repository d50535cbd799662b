use contracts::forms::StepDef;
use leptos::prelude::*;

/// Шапка мастера: список шагов с отметкой активного и пройденных.
/// Шаги — данные (contracts::forms::StepDef), а не захардкоженные экраны.
#[component]
pub fn WizardHeader(
    steps: &'static [StepDef],
    #[prop(into)] current_step: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="wizard-header">
            {steps
                .iter()
                .map(|step| {
                    let index = step.index;
                    let is_active = Signal::derive(move || current_step.get() == index);
                    let is_done = Signal::derive(move || current_step.get() > index);
                    view! {
                        <div
                            class="wizard-header__step"
                            class=("wizard-header__step--active", is_active)
                            class=("wizard-header__step--done", is_done)
                        >
                            <span class="wizard-header__index">{index + 1}</span>
                            <span class="wizard-header__title">{step.title}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

use super::error_map::ErrorMap;
use super::state::FormState;
use super::steps::{validate_all, MultiStepDraft};

/// Фазы отправки формы: Editing -> Validating -> Submitting -> Success/Failed.
///
/// Failed сохраняет черновик и активный шаг; повторная отправка — только
/// явным действием пользователя, автоматических ретраев нет.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    Editing,
    Validating,
    Submitting,
    Success,
    Failed(String),
}

impl SubmissionPhase {
    /// Кнопка отправки заблокирована: второй submit не может уйти,
    /// пока первый в полёте
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::Submitting)
    }
}

/// Решение по отправке, принятое до какого-либо сетевого вызова
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Валидация не прошла: сеть не трогаем, возвращаем пользователя
    /// на первый шаг с ошибками
    Rejected {
        first_failing_step: usize,
        errors: ErrorMap,
    },
    Proceed,
}

/// Сквозная валидация перед отправкой
pub fn decide_submit<D: MultiStepDraft>(draft: &D) -> SubmitDecision {
    let outcome = validate_all(draft);
    match outcome.first_failing_step {
        Some(step) => SubmitDecision::Rejected {
            first_failing_step: step,
            errors: draft.validate_step(step),
        },
        None => SubmitDecision::Proceed,
    }
}

/// Применить отказ к состоянию формы: перейти на сбойный шаг и показать ошибки
pub fn apply_rejection<D: MultiStepDraft>(
    state: &mut FormState<D>,
    first_failing_step: usize,
    errors: ErrorMap,
) {
    state.current_step = first_failing_step;
    state.errors = errors;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductDraft, STEP_INVENTORY};

    fn valid_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.name = "Стул".to_string();
        draft.category = "cat1".to_string();
        draft.pricing.base_price = "49.99".to_string();
        draft.inventory.quantity = "10".to_string();
        draft
    }

    #[test]
    fn test_empty_quantity_rejected_before_network() {
        let mut draft = valid_draft();
        draft.inventory.quantity = String::new();

        // Отказ до какого-либо сетевого вызова: пользователь возвращается
        // на шаг остатков с ошибкой по полю
        match decide_submit(&draft) {
            SubmitDecision::Rejected {
                first_failing_step,
                errors,
            } => {
                assert_eq!(first_failing_step, STEP_INVENTORY);
                assert!(errors.contains_key("inventory.quantity"));

                let mut state = FormState::from_draft(draft);
                apply_rejection(&mut state, first_failing_step, errors);
                assert_eq!(state.current_step, STEP_INVENTORY);
                assert!(state.error_for("inventory.quantity").is_some());
            }
            SubmitDecision::Proceed => panic!("пустой остаток должен блокировать отправку"),
        }
    }

    #[test]
    fn test_valid_draft_proceeds() {
        assert_eq!(decide_submit(&valid_draft()), SubmitDecision::Proceed);
    }

    #[test]
    fn test_busy_phases() {
        assert!(SubmissionPhase::Submitting.is_busy());
        assert!(SubmissionPhase::Validating.is_busy());
        assert!(!SubmissionPhase::Editing.is_busy());
        assert!(!SubmissionPhase::Failed("x".to_string()).is_busy());
    }
}

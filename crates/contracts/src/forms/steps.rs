use super::error_map::ErrorMap;

/// Описание шага мастера: порядок и заголовок.
///
/// Список шагов — данные, а не захардкоженный switch: порядок и валидация
/// проверяются без монтирования каких-либо view-компонентов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    pub index: usize,
    pub title: &'static str,
}

/// Черновик, редактируемый через многошаговую форму
pub trait MultiStepDraft: Clone + Default {
    /// Упорядоченный список шагов, неизменный на время жизни формы
    fn steps() -> &'static [StepDef];

    /// Валидация одного шага. Чистая функция: без побочных эффектов и I/O.
    fn validate_step(&self, step: usize) -> ErrorMap;
}

/// Итог сквозной валидации всех шагов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    pub is_valid: bool,
    /// Первый шаг с ошибками, чтобы контроллер вернул на него пользователя
    pub first_failing_step: Option<usize>,
}

/// Прогнать валидаторы всех шагов по порядку
pub fn validate_all<D: MultiStepDraft>(draft: &D) -> StepValidation {
    for step in D::steps() {
        if !draft.validate_step(step.index).is_empty() {
            return StepValidation {
                is_valid: false,
                first_failing_step: Some(step.index),
            };
        }
    }
    StepValidation {
        is_valid: true,
        first_failing_step: None,
    }
}

use super::error_map::ErrorMap;
use super::steps::MultiStepDraft;

/// Состояние многошаговой формы: черновик, ошибки, активный шаг.
///
/// Хранится во фронтенде внутри `RwSignal`, но сам по себе не знает ни о
/// сигналах, ни о wasm — переходы между шагами тестируются нативно.
#[derive(Debug, Clone, Default)]
pub struct FormState<D: MultiStepDraft> {
    pub draft: D,
    pub errors: ErrorMap,
    pub current_step: usize,
}

impl<D: MultiStepDraft> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            errors: ErrorMap::new(),
            current_step: 0,
        }
    }

    /// Форма редактирования: черновик гидратирован из существующей записи
    pub fn from_draft(draft: D) -> Self {
        Self {
            draft,
            errors: ErrorMap::new(),
            current_step: 0,
        }
    }

    /// Мутация поля черновика. Ошибка этого поля снимается сразу же,
    /// остальная карта ошибок не трогается.
    pub fn update_field(&mut self, path: &str, mutate: impl FnOnce(&mut D)) {
        mutate(&mut self.draft);
        self.errors.remove(path);
    }

    /// Перейти на следующий шаг, если текущий проходит валидацию.
    /// Возвращает false (и публикует ошибки шага), если переход запрещён.
    pub fn next(&mut self) -> bool {
        let step_errors = self.draft.validate_step(self.current_step);
        if !step_errors.is_empty() {
            self.errors = step_errors;
            return false;
        }
        self.errors.clear();
        if self.current_step + 1 < D::steps().len() {
            self.current_step += 1;
        }
        true
    }

    /// Назад — безусловно
    pub fn back(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == D::steps().len()
    }

    pub fn error_for(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductDraft, STEP_INVENTORY};

    #[test]
    fn test_next_blocked_until_step_valid() {
        let mut state = FormState::<ProductDraft>::new();
        assert!(!state.next());
        assert_eq!(state.current_step, 0);
        assert!(state.error_for("name").is_some());

        state.update_field("name", |d| d.name = "Стул".to_string());
        state.update_field("category", |d| d.category = "cat1".to_string());
        assert!(state.next());
        assert_eq!(state.current_step, 1);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_editing_clears_exactly_one_error() {
        let mut state = FormState::<ProductDraft>::new();
        state.next();
        assert!(state.error_for("name").is_some());
        assert!(state.error_for("category").is_some());

        state.update_field("name", |d| d.name = "С".to_string());
        assert!(state.error_for("name").is_none());
        // Остальные ошибки не тронуты
        assert!(state.error_for("category").is_some());
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut state = FormState::<ProductDraft>::new();
        state.current_step = STEP_INVENTORY;
        state.back();
        assert_eq!(state.current_step, STEP_INVENTORY - 1);
        state.current_step = 0;
        state.back();
        assert_eq!(state.current_step, 0);
    }
}

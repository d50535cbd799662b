use super::draft::BranchDraft;
use crate::fields;
use crate::forms::error_map::{require, ErrorMap};
use crate::forms::steps::{MultiStepDraft, StepDef};

pub const STEP_GENERAL: usize = 0;
pub const STEP_ADDRESS: usize = 1;

const STEPS: &[StepDef] = &[
    StepDef { index: STEP_GENERAL, title: "Основное" },
    StepDef { index: STEP_ADDRESS, title: "Адрес" },
];

impl MultiStepDraft for BranchDraft {
    fn steps() -> &'static [StepDef] {
        STEPS
    }

    fn validate_step(&self, step: usize) -> ErrorMap {
        let mut errors = ErrorMap::new();
        match step {
            STEP_GENERAL => {
                require(
                    &mut errors,
                    !self.name.trim().is_empty(),
                    "name",
                    "Наименование обязательно для заполнения",
                );
                let email = self.email.trim();
                require(
                    &mut errors,
                    email.is_empty() || fields::is_valid_email(email),
                    "email",
                    "Некорректный e-mail",
                );
                let phone = self.phone.trim();
                require(
                    &mut errors,
                    phone.is_empty() || fields::is_valid_phone(phone),
                    "phone",
                    "Некорректный номер телефона",
                );
            }
            STEP_ADDRESS => {
                self.address.validate_required("address", &mut errors);
            }
            _ => {}
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::steps::validate_all;

    #[test]
    fn test_address_step_requirements() {
        let mut draft = BranchDraft::default();
        draft.name = "Центральный".to_string();

        let outcome = validate_all(&draft);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.first_failing_step, Some(STEP_ADDRESS));

        draft.address.line1 = "Тверская 1".to_string();
        draft.address.city = "Москва".to_string();
        draft.address.country_code = "ru".to_string();
        // Длина кода проверяется независимо от регистра
        assert!(validate_all(&draft).is_valid);

        draft.address.country_code = "RUS".to_string();
        assert!(draft
            .validate_step(STEP_ADDRESS)
            .contains_key("address.countryCode"));
    }
}

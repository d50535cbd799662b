use super::draft::WorkerDraft;
use crate::fields;
use crate::forms::error_map::{require, ErrorMap};
use crate::forms::steps::{MultiStepDraft, StepDef};

pub const STEP_PERSONAL: usize = 0;
pub const STEP_CONTACT: usize = 1;
pub const STEP_ACCOUNT: usize = 2;

const STEPS: &[StepDef] = &[
    StepDef { index: STEP_PERSONAL, title: "Личные данные" },
    StepDef { index: STEP_CONTACT, title: "Контакты" },
    StepDef { index: STEP_ACCOUNT, title: "Учётная запись" },
];

impl MultiStepDraft for WorkerDraft {
    fn steps() -> &'static [StepDef] {
        STEPS
    }

    fn validate_step(&self, step: usize) -> ErrorMap {
        let mut errors = ErrorMap::new();
        match step {
            STEP_PERSONAL => {
                require(
                    &mut errors,
                    !self.first_name.trim().is_empty(),
                    "firstName",
                    "Имя обязательно для заполнения",
                );
                require(
                    &mut errors,
                    !self.last_name.trim().is_empty(),
                    "lastName",
                    "Фамилия обязательна для заполнения",
                );
                require(
                    &mut errors,
                    !self.gender.trim().is_empty(),
                    "gender",
                    "Пол обязателен для заполнения",
                );
                let national_id = self.national_id.trim();
                require(
                    &mut errors,
                    national_id.is_empty() || fields::is_valid_national_id(national_id),
                    "nationalId",
                    "ID: 5-20 латинских букв и цифр",
                );
            }
            STEP_CONTACT => {
                require(
                    &mut errors,
                    !self.email.trim().is_empty(),
                    "email",
                    "E-mail обязателен для заполнения",
                );
                require(
                    &mut errors,
                    self.email.trim().is_empty() || fields::is_valid_email(self.email.trim()),
                    "email",
                    "Некорректный e-mail",
                );
                require(
                    &mut errors,
                    !self.phone.trim().is_empty(),
                    "phone",
                    "Телефон обязателен для заполнения",
                );
                require(
                    &mut errors,
                    self.phone.trim().is_empty() || fields::is_valid_phone(self.phone.trim()),
                    "phone",
                    "Некорректный номер телефона",
                );
                let emergency_phone = self.emergency_contact.phone.trim();
                require(
                    &mut errors,
                    emergency_phone.is_empty() || fields::is_valid_phone(emergency_phone),
                    "emergencyContact.phone",
                    "Некорректный номер телефона",
                );
                self.address.validate_optional("address", &mut errors);
            }
            STEP_ACCOUNT => {
                // Пароль запрашивается только при создании
                if !self.is_edit() {
                    require(
                        &mut errors,
                        !self.password.is_empty(),
                        "password",
                        "Пароль обязателен для заполнения",
                    );
                    require(
                        &mut errors,
                        self.password_confirm == self.password,
                        "passwordConfirm",
                        "Пароли не совпадают",
                    );
                }
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

    fn valid_draft() -> WorkerDraft {
        let mut draft = WorkerDraft::default();
        draft.first_name = "Иван".to_string();
        draft.last_name = "Петров".to_string();
        draft.gender = "m".to_string();
        draft.email = "ivan@example.com".to_string();
        draft.phone = "+79123456789".to_string();
        draft.password = "secret123".to_string();
        draft.password_confirm = "secret123".to_string();
        draft
    }

    #[test]
    fn test_required_fields() {
        let draft = WorkerDraft::default();
        let errors = draft.validate_step(STEP_PERSONAL);
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("gender"));

        let errors = draft.validate_step(STEP_CONTACT);
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("phone"));

        let errors = draft.validate_step(STEP_ACCOUNT);
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_all(&valid_draft()).is_valid);
    }

    #[test]
    fn test_emergency_phone_format_checked_when_present() {
        let mut draft = valid_draft();
        draft.emergency_contact.phone = "nope".to_string();
        let errors = draft.validate_step(STEP_CONTACT);
        assert!(errors.contains_key("emergencyContact.phone"));

        draft.emergency_contact.phone = "+7 912 000-11-22".to_string();
        assert!(draft.validate_step(STEP_CONTACT).is_empty());
    }

    #[test]
    fn test_password_not_required_on_edit() {
        let mut draft = valid_draft();
        draft.existing_id = Some("w1".to_string());
        draft.password = String::new();
        draft.password_confirm = String::new();
        assert!(draft.validate_step(STEP_ACCOUNT).is_empty());
    }

    #[test]
    fn test_password_mismatch() {
        let mut draft = valid_draft();
        draft.password_confirm = "other".to_string();
        let errors = draft.validate_step(STEP_ACCOUNT);
        assert!(errors.contains_key("passwordConfirm"));
    }
}

use super::aggregate::{EmergencyContactDto, WorkerDto};
use super::draft::WorkerDraft;
use crate::fields;

/// Черновик сотрудника -> wire-формат. Телефоны приводятся к E.164-виду
/// (без пробелов и дефисов), код страны — к верхнему регистру.
pub fn normalize_worker(draft: &WorkerDraft) -> Result<WorkerDto, String> {
    Ok(WorkerDto {
        id: draft.existing_id.clone(),
        first_name: draft.first_name.trim().to_string(),
        last_name: draft.last_name.trim().to_string(),
        email: draft.email.trim().to_lowercase(),
        phone: fields::normalize_phone(draft.phone.trim()),
        gender: draft.gender.trim().to_string(),
        birth_date: draft.birth_date.trim().to_string(),
        national_id: draft.national_id.trim().to_uppercase(),
        position: draft.position.trim().to_string(),
        address: draft.address.to_dto(),
        emergency_contact: EmergencyContactDto {
            name: draft.emergency_contact.name.trim().to_string(),
            phone: fields::normalize_phone(draft.emergency_contact.phone.trim()),
            relation: draft.emergency_contact.relation.trim().to_string(),
        },
        password: if draft.password.is_empty() {
            None
        } else {
            Some(draft.password.clone())
        },
        created_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_and_email_normalization() {
        let mut draft = WorkerDraft::default();
        draft.first_name = "Иван".to_string();
        draft.last_name = "Петров".to_string();
        draft.email = " Ivan@Example.COM ".to_string();
        draft.phone = "+7 (912) 345-67-89".to_string();
        draft.gender = "m".to_string();

        let dto = normalize_worker(&draft).unwrap();
        assert_eq!(dto.email, "ivan@example.com");
        assert_eq!(dto.phone, "+79123456789");
        assert_eq!(dto.password, None);
    }

    #[test]
    fn test_password_included_only_when_set() {
        let mut draft = WorkerDraft::default();
        draft.password = "secret123".to_string();
        let dto = normalize_worker(&draft).unwrap();
        assert_eq!(dto.password.as_deref(), Some("secret123"));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["password"], "secret123");

        draft.password.clear();
        let json = serde_json::to_value(normalize_worker(&draft).unwrap()).unwrap();
        assert!(json.get("password").is_none());
    }
}

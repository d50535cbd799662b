use super::aggregate::BranchDto;
use super::draft::BranchDraft;
use crate::fields;

/// Черновик филиала -> wire-формат
pub fn normalize_branch(draft: &BranchDraft) -> Result<BranchDto, String> {
    Ok(BranchDto {
        id: draft.existing_id.clone(),
        name: draft.name.trim().to_string(),
        phone: fields::normalize_phone(draft.phone.trim()),
        email: draft.email.trim().to_lowercase(),
        address: draft.address.to_dto(),
        manager_name: draft.manager_name.trim().to_string(),
        created_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_uppercased() {
        let mut draft = BranchDraft::default();
        draft.name = "Центральный".to_string();
        draft.address.line1 = "Тверская 1".to_string();
        draft.address.city = "Москва".to_string();
        draft.address.country_code = "ru".to_string();

        let dto = normalize_branch(&draft).unwrap();
        assert_eq!(dto.address.country_code, "RU");
    }
}

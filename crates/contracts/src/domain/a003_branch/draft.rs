use super::aggregate::BranchDto;
use crate::domain::common::AddressDraft;

/// Черновик филиала
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchDraft {
    pub existing_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: AddressDraft,
    pub manager_name: String,
}

impl BranchDraft {
    pub fn from_dto(dto: &BranchDto) -> Self {
        Self {
            existing_id: dto.id.clone(),
            name: dto.name.clone(),
            phone: dto.phone.clone(),
            email: dto.email.clone(),
            address: AddressDraft::from_dto(&dto.address),
            manager_name: dto.manager_name.clone(),
        }
    }
}

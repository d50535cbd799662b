use super::aggregate::WorkerDto;
use crate::domain::common::AddressDraft;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmergencyContactDraft {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

/// Черновик сотрудника
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerDraft {
    /// Id существующей записи в режиме редактирования
    pub existing_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub birth_date: String,
    pub national_id: String,
    pub position: String,
    pub address: AddressDraft,
    pub emergency_contact: EmergencyContactDraft,
    pub password: String,
    pub password_confirm: String,
}

impl WorkerDraft {
    /// Гидратация для режима редактирования: пароль не приходит с бэкенда
    /// и при редактировании не запрашивается
    pub fn from_dto(dto: &WorkerDto) -> Self {
        Self {
            existing_id: dto.id.clone(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            gender: dto.gender.clone(),
            birth_date: dto.birth_date.clone(),
            national_id: dto.national_id.clone(),
            position: dto.position.clone(),
            address: AddressDraft::from_dto(&dto.address),
            emergency_contact: EmergencyContactDraft {
                name: dto.emergency_contact.name.clone(),
                phone: dto.emergency_contact.phone.clone(),
                relation: dto.emergency_contact.relation.clone(),
            },
            password: String::new(),
            password_confirm: String::new(),
        }
    }

    /// Редактирование существующей записи: шаг аккаунта пароль не требует
    pub fn is_edit(&self) -> bool {
        self.existing_id.is_some()
    }
}

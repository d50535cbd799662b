//! Сотрудник: онбординг через трёхшаговый мастер.

pub mod aggregate;
pub mod draft;
pub mod normalize;
pub mod validation;

pub use aggregate::{EmergencyContactDto, WorkerDto};
pub use draft::{EmergencyContactDraft, WorkerDraft};
pub use normalize::normalize_worker;
pub use validation::{STEP_ACCOUNT, STEP_CONTACT, STEP_PERSONAL};

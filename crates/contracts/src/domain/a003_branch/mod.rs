//! Филиал (торговая точка).

pub mod aggregate;
pub mod draft;
pub mod normalize;
pub mod validation;

pub use aggregate::BranchDto;
pub use draft::BranchDraft;
pub use normalize::normalize_branch;
pub use validation::{STEP_ADDRESS, STEP_GENERAL};

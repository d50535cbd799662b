//! Движок многошаговых форм: шаги как данные, карта ошибок по путям полей,
//! состояние формы и машина отправки.

pub mod error_map;
pub mod state;
pub mod steps;
pub mod submission;

pub use error_map::ErrorMap;
pub use state::FormState;
pub use steps::{validate_all, MultiStepDraft, StepDef, StepValidation};
pub use submission::{decide_submit, SubmissionPhase, SubmitDecision};

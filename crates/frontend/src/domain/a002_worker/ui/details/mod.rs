//! Онбординг сотрудника: трёхшаговый мастер

mod view;
mod view_model;

pub use view::WorkerDetailsPage;

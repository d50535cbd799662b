//! Карточка филиала: двухшаговый мастер

mod view;
mod view_model;

pub use view::BranchDetailsPage;

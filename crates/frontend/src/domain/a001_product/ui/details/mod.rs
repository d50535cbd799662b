//! Карточка товара: мастер создания/редактирования
//!
//! Упрощённый MVVM:
//! - model.rs: API-функции (fetch, save, multipart)
//! - view_model.rs: ViewModel с командами и состоянием мастера
//! - view.rs: страница мастера (чистый UI)
//! - steps/: рендереры шагов

pub mod model;
pub mod steps;
mod view;
mod view_model;

pub use view::ProductDetailsPage;
pub use view_model::ProductDetailsViewModel;

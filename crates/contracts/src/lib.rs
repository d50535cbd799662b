//! Контракты, разделяемые фронтендом консоли и HTTP-бэкендом.
//!
//! Crate не зависит от wasm: черновики форм, валидация шагов, нормализация
//! payload'ов и табличный конвейер тестируются нативно.

pub mod domain;
pub mod fields;
pub mod forms;
pub mod list;

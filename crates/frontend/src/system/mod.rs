//! Системные страницы вне консоли

pub mod pages;

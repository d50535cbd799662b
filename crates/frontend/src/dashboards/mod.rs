//! Дашборды консоли

pub mod sales_dashboard;

pub use sales_dashboard::SalesDashboard;

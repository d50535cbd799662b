//! Продажи: строки истории для табличного представления.

pub mod aggregate;

pub use aggregate::SaleDto;

pub mod list;

pub use list::SalesList;

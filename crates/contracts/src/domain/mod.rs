pub mod common;

pub mod a001_product;
pub mod a002_worker;
pub mod a003_branch;
pub mod a004_sale;

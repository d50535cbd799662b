pub mod details;
pub mod list;

pub use details::BranchDetailsPage;
pub use list::BranchList;

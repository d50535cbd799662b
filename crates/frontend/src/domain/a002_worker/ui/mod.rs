pub mod details;
pub mod list;

pub use details::WorkerDetailsPage;
pub use list::WorkerList;

pub mod shell;
pub mod sidebar;

pub use shell::Shell;

pub mod error_banner;
pub mod filter_bar;
pub mod form_field;
pub mod stat_card;
pub mod wizard_header;

pub use error_banner::ErrorBanner;
pub use filter_bar::{FilterBar, FilterColumn};
pub use form_field::FormField;
pub use stat_card::{StatCard, StatFormat};
pub use wizard_header::WizardHeader;

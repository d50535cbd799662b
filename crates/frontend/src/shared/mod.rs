pub mod api_utils;
pub mod components;
pub mod context;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;

pub mod api_utils;
pub mod clock;
pub mod components;
pub mod confirm;
pub mod data_source;
pub mod format;
pub mod page;

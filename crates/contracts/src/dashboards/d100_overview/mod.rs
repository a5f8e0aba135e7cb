pub mod builder;
pub mod dto;

pub use builder::{build_overview, OverviewInput};
pub use dto::*;

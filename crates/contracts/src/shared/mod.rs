pub mod analytics;
pub mod api_response;
pub mod data_source;
pub mod sample_data;

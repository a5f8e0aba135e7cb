//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod entity_metadata;
pub mod validation;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;

use serde::{Deserialize, Serialize};

/// Запрос на смену статуса записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChangeDto<S> {
    pub status: S,
    #[serde(default)]
    pub note: Option<String>,
}

/// Короткий бизнес-код для новой записи, например "PO-1A2B3C4D"
pub fn generate_code(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, uuid[..8].to_uppercase())
}

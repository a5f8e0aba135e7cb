use chrono::{DateTime, Utc};
use contracts::domain::common::EntityMetadata;
use uuid::Uuid;

/// Служебные колонки строки в метаданные агрегата
pub fn metadata_from_row(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    is_deleted: bool,
    version: i32,
) -> EntityMetadata {
    EntityMetadata::restore(created_at, updated_at, is_deleted, version)
}

pub fn uuid_from_row(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap_or_else(|_| {
        tracing::warn!("Row with malformed id '{}', generating a new one", id);
        Uuid::new_v4()
    })
}

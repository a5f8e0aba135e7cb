use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Служебные поля записи: даты, мягкое удаление, счётчик изменений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Удалённые записи не попадают в списки, но остаются в хранилище
    pub is_deleted: bool,
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Метаданные, прочитанные из хранилища; пустые даты заменяются текущим временем
    pub fn restore(
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
        is_deleted: bool,
        version: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            created_at: created_at.unwrap_or(now),
            updated_at: updated_at.unwrap_or(now),
            is_deleted,
            version,
        }
    }

    /// Фиксация изменения перед записью
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.touch();
    }

    pub fn is_live(&self) -> bool {
        !self.is_deleted
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_deleted_bumps_version() {
        let mut meta = EntityMetadata::new();
        meta.mark_deleted();
        assert!(!meta.is_live());
        assert_eq!(meta.version, 1);
        assert!(meta.updated_at >= meta.created_at);
    }

    #[test]
    fn test_restore_keeps_stored_values() {
        let created = Utc::now() - chrono::Duration::days(3);
        let meta = EntityMetadata::restore(Some(created), None, true, 7);
        assert_eq!(meta.created_at, created);
        assert!(meta.is_deleted);
        assert_eq!(meta.version, 7);
    }
}

use contracts::domain::a006_transaction::aggregate::TransactionHistoryEntry;
use contracts::enums::TransactionStatus;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

/// Журнал смены статусов входящих записей
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_transaction_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub transaction_id: String,
    pub from_status: String,
    pub to_status: String,
    pub changed_at: chrono::DateTime<chrono::Utc>,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TransactionHistoryEntry {
    fn from(m: Model) -> Self {
        TransactionHistoryEntry {
            transaction_id: m.transaction_id,
            from_status: TransactionStatus::from_code(&m.from_status).unwrap_or_default(),
            to_status: TransactionStatus::from_code(&m.to_status).unwrap_or_default(),
            changed_at: m.changed_at,
            note: m.note,
        }
    }
}

pub async fn append_with<C: ConnectionTrait>(
    conn: &C,
    entry: &TransactionHistoryEntry,
) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        transaction_id: Set(entry.transaction_id.clone()),
        from_status: Set(entry.from_status.code().to_string()),
        to_status: Set(entry.to_status.code().to_string()),
        changed_at: Set(entry.changed_at),
        note: Set(entry.note.clone()),
    };
    active.insert(conn).await?;
    Ok(())
}

/// История по записи, от старых к новым
pub async fn list_for(transaction_id: &str) -> anyhow::Result<Vec<TransactionHistoryEntry>> {
    let items = Entity::find()
        .filter(Column::TransactionId.eq(transaction_id))
        .order_by_asc(Column::ChangedAt)
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

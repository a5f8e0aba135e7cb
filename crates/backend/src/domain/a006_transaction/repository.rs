use chrono::{NaiveDate, Utc};
use contracts::domain::a006_transaction::aggregate::{Transaction, TransactionId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::TransactionStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Номер входящей записи
    pub code: String,
    /// Тема
    pub description: String,
    pub comment: Option<String>,
    pub receive_date: NaiveDate,
    pub transaction_type: String,
    pub sender_facility: String,
    pub receiver_facility: String,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Transaction {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Transaction {
            base: BaseAggregate::with_metadata(
                TransactionId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            receive_date: m.receive_date,
            transaction_type: m.transaction_type,
            sender_facility: m.sender_facility,
            receiver_facility: m.receiver_facility,
            status: TransactionStatus::from_code(&m.status).unwrap_or_default(),
        }
    }
}

fn to_active(aggregate: &Transaction) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        receive_date: Set(aggregate.receive_date),
        transaction_type: Set(aggregate.transaction_type.clone()),
        sender_facility: Set(aggregate.sender_facility.clone()),
        receiver_facility: Set(aggregate.receiver_facility.clone()),
        status: Set(aggregate.status.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Transaction>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::ReceiveDate)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Transaction>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

/// Поиск с учётом удалённых (история доступна и по ним)
pub async fn exists_any(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::find_by_id(id.to_string())
        .one(get_connection()?)
        .await?;
    Ok(result.is_some())
}

pub async fn insert_with<C: ConnectionTrait>(conn: &C, aggregate: &Transaction) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn).await?;
    Ok(aggregate.base.id.value())
}

pub async fn insert(aggregate: &Transaction) -> anyhow::Result<Uuid> {
    insert_with(get_connection()?, aggregate).await
}

pub async fn update_with<C: ConnectionTrait>(conn: &C, aggregate: &Transaction) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn).await?;
    Ok(())
}

pub async fn update(aggregate: &Transaction) -> anyhow::Result<()> {
    update_with(get_connection()?, aggregate).await
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(get_connection()?)
        .await?;
    Ok(result.rows_affected > 0)
}

use chrono::NaiveDate;
use contracts::domain::a005_withdrawal_order::aggregate::{WithdrawalOrder, WithdrawalOrderId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::WithdrawalStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_withdrawal_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    /// Наименование позиции на момент выдачи
    pub description: String,
    pub comment: Option<String>,
    pub item_ref: String,
    pub beneficiary_facility: String,
    pub requested_quantity: i64,
    pub status: String,
    pub recipient_name: String,
    pub recipient_contact: Option<String>,
    pub withdrawal_date: NaiveDate,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WithdrawalOrder {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        WithdrawalOrder {
            base: BaseAggregate::with_metadata(
                WithdrawalOrderId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            item_ref: m.item_ref,
            beneficiary_facility: m.beneficiary_facility,
            requested_quantity: m.requested_quantity,
            status: WithdrawalStatus::from_code(&m.status).unwrap_or_default(),
            recipient_name: m.recipient_name,
            recipient_contact: m.recipient_contact,
            withdrawal_date: m.withdrawal_date,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<WithdrawalOrder>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::WithdrawalDate)
        .order_by_desc(Column::CreatedAt)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert_with<C: ConnectionTrait>(
    conn: &C,
    aggregate: &WithdrawalOrder,
) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        item_ref: Set(aggregate.item_ref.clone()),
        beneficiary_facility: Set(aggregate.beneficiary_facility.clone()),
        requested_quantity: Set(aggregate.requested_quantity),
        status: Set(aggregate.status.code().to_string()),
        recipient_name: Set(aggregate.recipient_name.clone()),
        recipient_contact: Set(aggregate.recipient_contact.clone()),
        withdrawal_date: Set(aggregate.withdrawal_date),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn).await?;
    Ok(uuid)
}

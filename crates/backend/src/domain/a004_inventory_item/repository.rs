use chrono::Utc;
use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemId};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_inventory_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Номер позиции
    pub code: String,
    /// Наименование позиции
    pub description: String,
    pub comment: Option<String>,
    pub category: String,
    pub received_quantity: i64,
    pub issued_quantity: i64,
    pub minimum_quantity: i64,
    pub purchase_value: f64,
    pub supplier_name: String,
    pub beneficiary_facility: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryItem {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        InventoryItem {
            base: BaseAggregate::with_metadata(
                InventoryItemId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            category: m.category,
            received_quantity: m.received_quantity,
            issued_quantity: m.issued_quantity,
            minimum_quantity: m.minimum_quantity,
            purchase_value: m.purchase_value,
            supplier_name: m.supplier_name,
            beneficiary_facility: m.beneficiary_facility,
        }
    }
}

fn to_active(aggregate: &InventoryItem) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        received_quantity: Set(aggregate.received_quantity),
        issued_quantity: Set(aggregate.issued_quantity),
        minimum_quantity: Set(aggregate.minimum_quantity),
        purchase_value: Set(aggregate.purchase_value),
        supplier_name: Set(aggregate.supplier_name.clone()),
        beneficiary_facility: Set(aggregate.beneficiary_facility.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Code)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id_with<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> anyhow::Result<Option<InventoryItem>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<InventoryItem>> {
    get_by_id_with(get_connection()?, id).await
}

pub async fn get_by_item_number(item_number: &str) -> anyhow::Result<Option<InventoryItem>> {
    let result = Entity::find()
        .filter(Column::Code.eq(item_number))
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &InventoryItem) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(get_connection()?).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update_with<C: ConnectionTrait>(conn: &C, aggregate: &InventoryItem) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn).await?;
    Ok(())
}

pub async fn update(aggregate: &InventoryItem) -> anyhow::Result<()> {
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

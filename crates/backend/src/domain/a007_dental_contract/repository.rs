use chrono::{NaiveDate, Utc};
use contracts::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::OrderStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_dental_contract")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub order_date: NaiveDate,
    pub item_number: String,
    pub quantity: i64,
    pub beneficiary_facility: String,
    pub financial_approval_number: Option<String>,
    pub financial_approval_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub supplier_name: String,
    pub supplier_contact: Option<String>,
    pub status: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: Option<NaiveDate>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DentalContract {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        DentalContract {
            base: BaseAggregate::with_metadata(
                DentalContractId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            order_date: m.order_date,
            item_number: m.item_number,
            quantity: m.quantity,
            beneficiary_facility: m.beneficiary_facility,
            financial_approval_number: m.financial_approval_number,
            financial_approval_date: m.financial_approval_date,
            total_cost: m.total_cost,
            supplier_name: m.supplier_name,
            supplier_contact: m.supplier_contact,
            status: OrderStatus::from_code(&m.status).unwrap_or_default(),
            expected_delivery_date: m.expected_delivery_date,
            actual_delivery_date: m.actual_delivery_date,
        }
    }
}

fn to_active(aggregate: &DentalContract) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        order_date: Set(aggregate.order_date),
        item_number: Set(aggregate.item_number.clone()),
        quantity: Set(aggregate.quantity),
        beneficiary_facility: Set(aggregate.beneficiary_facility.clone()),
        financial_approval_number: Set(aggregate.financial_approval_number.clone()),
        financial_approval_date: Set(aggregate.financial_approval_date),
        total_cost: Set(aggregate.total_cost),
        supplier_name: Set(aggregate.supplier_name.clone()),
        supplier_contact: Set(aggregate.supplier_contact.clone()),
        status: Set(aggregate.status.code().to_string()),
        expected_delivery_date: Set(aggregate.expected_delivery_date),
        actual_delivery_date: Set(aggregate.actual_delivery_date),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<DentalContract>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::OrderDate)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<DentalContract>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &DentalContract) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(get_connection()?).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &DentalContract) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(get_connection()?).await?;
    Ok(())
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

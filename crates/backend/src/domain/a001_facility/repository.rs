use chrono::Utc;
use contracts::domain::a001_facility::aggregate::{Facility, FacilityId};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_facility")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub sector: String,
    pub facility_type: String,
    pub manager_name: String,
    pub manager_phone: String,
    pub email: Option<String>,
    pub clinics_count: i64,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Facility {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Facility {
            base: BaseAggregate::with_metadata(
                FacilityId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            sector: m.sector,
            facility_type: m.facility_type,
            manager_name: m.manager_name,
            manager_phone: m.manager_phone,
            email: m.email,
            clinics_count: m.clinics_count,
            is_active: m.is_active,
        }
    }
}

fn to_active(aggregate: &Facility) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        sector: Set(aggregate.sector.clone()),
        facility_type: Set(aggregate.facility_type.clone()),
        manager_name: Set(aggregate.manager_name.clone()),
        manager_phone: Set(aggregate.manager_phone.clone()),
        email: Set(aggregate.email.clone()),
        clinics_count: Set(aggregate.clinics_count),
        is_active: Set(aggregate.is_active),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Facility>> {
    let mut items: Vec<Facility> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Facility>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<Facility>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Facility) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(get_connection()?).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Facility) -> anyhow::Result<()> {
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

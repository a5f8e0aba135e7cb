use chrono::{NaiveDate, Utc};
use contracts::domain::a002_report::aggregate::{Report, ReportId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::{ReportStatus, Severity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::metadata::{metadata_from_row, uuid_from_row};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub report_type: String,
    pub category: String,
    pub details: String,
    pub status: String,
    pub severity: String,
    pub facility_ref: Option<String>,
    pub facility_name: String,
    pub reporter: String,
    pub reported_at: NaiveDate,
    pub resolved_at: Option<NaiveDate>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Report {
    fn from(m: Model) -> Self {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Report {
            base: BaseAggregate::with_metadata(
                ReportId(uuid_from_row(&m.id)),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            report_type: m.report_type,
            category: m.category,
            details: m.details,
            status: ReportStatus::from_code(&m.status).unwrap_or_default(),
            severity: Severity::from_code(&m.severity).unwrap_or_default(),
            facility_ref: m.facility_ref,
            facility_name: m.facility_name,
            reporter: m.reporter,
            reported_at: m.reported_at,
            resolved_at: m.resolved_at,
        }
    }
}

fn to_active(aggregate: &Report) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        report_type: Set(aggregate.report_type.clone()),
        category: Set(aggregate.category.clone()),
        details: Set(aggregate.details.clone()),
        status: Set(aggregate.status.code().to_string()),
        severity: Set(aggregate.severity.code().to_string()),
        facility_ref: Set(aggregate.facility_ref.clone()),
        facility_name: Set(aggregate.facility_name.clone()),
        reporter: Set(aggregate.reporter.clone()),
        reported_at: Set(aggregate.reported_at),
        resolved_at: Set(aggregate.resolved_at),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Список отчётов, новые сверху
pub async fn list_all() -> anyhow::Result<Vec<Report>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::ReportedAt)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Report>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Report) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(get_connection()?).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Report) -> anyhow::Result<()> {
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

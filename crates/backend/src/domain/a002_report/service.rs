use super::repository;
use crate::shared::clock::today;
use crate::shared::error::{not_found, validation};
use contracts::domain::a002_report::aggregate::{Report, ReportDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::ReportStatus;
use contracts::shared::sample_data;
use uuid::Uuid;

pub async fn create(dto: ReportDto) -> anyhow::Result<Report> {
    let mut aggregate = Report::new_for_insert(&dto, today());
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: ReportDto) -> anyhow::Result<Report> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Смена статуса отчёта; закрытие проставляет дату решения
pub async fn change_status(id: Uuid, change: StatusChangeDto<ReportStatus>) -> anyhow::Result<Report> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    let from = aggregate.status;
    aggregate.change_status(change.status, today());
    aggregate.before_write();
    repository::update(&aggregate).await?;
    tracing::info!(
        "Report {} status: {} -> {}",
        aggregate.base.code,
        from.code(),
        aggregate.status.code()
    );
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Report> {
    repository::get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn list_all() -> anyhow::Result<Vec<Report>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    if !repository::list_all().await?.is_empty() {
        return Ok(0);
    }
    let data = sample_data::reports(today());
    let count = data.len();
    for dto in data {
        create(dto).await?;
    }
    Ok(count)
}

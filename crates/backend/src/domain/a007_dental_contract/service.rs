use super::repository;
use crate::shared::clock::today;
use crate::shared::error::{not_found, validation};
use crate::shared::format::format_amount;
use contracts::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::OrderStatus;
use contracts::shared::sample_data;
use uuid::Uuid;

pub async fn create(dto: DentalContractDto) -> anyhow::Result<DentalContract> {
    let mut aggregate = DentalContract::new_for_insert(&dto, today());
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::insert(&aggregate).await?;
    tracing::info!(
        "Dental contract {} created, total {}",
        aggregate.base.code,
        format_amount(aggregate.total_cost)
    );
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: DentalContractDto) -> anyhow::Result<DentalContract> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Перевод договора по жизненному циклу new → approved → contracted → delivered
pub async fn change_status(
    id: Uuid,
    change: StatusChangeDto<OrderStatus>,
) -> anyhow::Result<DentalContract> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    let from = aggregate.status;
    aggregate
        .change_status(change.status, today())
        .map_err(validation)?;
    if from == aggregate.status {
        return Ok(aggregate);
    }
    aggregate.before_write();
    repository::update(&aggregate).await?;
    tracing::info!(
        "Dental contract {} status: {} -> {}",
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<DentalContract> {
    repository::get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn list_all() -> anyhow::Result<Vec<DentalContract>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    if !repository::list_all().await?.is_empty() {
        return Ok(0);
    }
    let today = today();
    let data = sample_data::dental_contracts(today);
    let count = data.len();
    for (dto, status) in data {
        let mut aggregate = DentalContract::new_for_insert(&dto, today);
        for step in status.path_from_new() {
            aggregate.change_status(step, today).map_err(validation)?;
        }
        aggregate.validate().map_err(validation)?;
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }
    Ok(count)
}

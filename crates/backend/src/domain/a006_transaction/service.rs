use super::{history_repository, repository};
use crate::shared::clock::today;
use crate::shared::data::db::get_connection;
use crate::shared::error::{not_found, validation};
use contracts::domain::a006_transaction::aggregate::{
    Transaction, TransactionDto, TransactionHistoryEntry,
};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::TransactionStatus;
use contracts::shared::sample_data;
use sea_orm::TransactionTrait;
use uuid::Uuid;

pub async fn create(dto: TransactionDto) -> anyhow::Result<Transaction> {
    let mut aggregate = Transaction::new_for_insert(&dto, today());
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: TransactionDto) -> anyhow::Result<Transaction> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Смена статуса с записью в журнал; повтор текущего статуса журнал не пополняет
pub async fn change_status(
    id: Uuid,
    change: StatusChangeDto<TransactionStatus>,
) -> anyhow::Result<Transaction> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    let entry = aggregate
        .change_status(change.status, change.note)
        .map_err(validation)?;
    if entry.from_status == entry.to_status {
        return Ok(aggregate);
    }
    aggregate.before_write();

    let txn = get_connection()?.begin().await?;
    repository::update_with(&txn, &aggregate).await?;
    history_repository::append_with(&txn, &entry).await?;
    txn.commit().await?;

    tracing::info!(
        "Transaction {} status: {} -> {}",
        aggregate.base.code,
        entry.from_status.code(),
        entry.to_status.code()
    );
    Ok(aggregate)
}

pub async fn history(id: Uuid) -> anyhow::Result<Vec<TransactionHistoryEntry>> {
    if !repository::exists_any(id).await? {
        return Err(not_found());
    }
    history_repository::list_for(&id.to_string()).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Transaction> {
    repository::get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn list_all() -> anyhow::Result<Vec<Transaction>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    if !repository::list_all().await?.is_empty() {
        return Ok(0);
    }
    let today = today();
    let data = sample_data::transactions(today);
    let count = data.len();
    let txn = get_connection()?.begin().await?;
    for (dto, status) in data {
        let mut aggregate = Transaction::new_for_insert(&dto, today);
        let entry = if status != TransactionStatus::Pending {
            Some(aggregate.change_status(status, None).map_err(validation)?)
        } else {
            None
        };
        aggregate.before_write();
        repository::insert_with(&txn, &aggregate).await?;
        if let Some(entry) = entry {
            history_repository::append_with(&txn, &entry).await?;
        }
    }
    txn.commit().await?;
    Ok(count)
}

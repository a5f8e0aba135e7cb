use super::repository;
use crate::domain::a004_inventory_item::repository as inventory_repository;
use crate::shared::clock::today;
use crate::shared::data::db::get_connection;
use crate::shared::error::{not_found, parse_id, validation};
use contracts::domain::a005_withdrawal_order::aggregate::{
    WithdrawalOrder, WithdrawalOrderDto, WithdrawalResult,
};
use sea_orm::TransactionTrait;

/// Выдача со склада: заявка и списание остатка пишутся в одной транзакции
pub async fn create(dto: WithdrawalOrderDto) -> anyhow::Result<WithdrawalResult> {
    let item_id = parse_id(&dto.item_ref)?;
    let txn = get_connection()?.begin().await?;

    let mut item = inventory_repository::get_by_id_with(&txn, item_id)
        .await?
        .ok_or_else(not_found)?;

    let mut order = WithdrawalOrder::new_for_item(&dto, &item, today()).map_err(validation)?;
    item.issue(order.requested_quantity).map_err(validation)?;
    item.before_write();
    order.before_write();

    inventory_repository::update_with(&txn, &item).await?;
    repository::insert_with(&txn, &order).await?;
    txn.commit().await?;

    tracing::info!(
        "Withdrawal {}: {} x {} issued to {}, available {}",
        order.base.code,
        item.item_number(),
        order.requested_quantity,
        order.beneficiary_facility,
        item.available_quantity()
    );

    Ok(WithdrawalResult { order, item })
}

pub async fn list_all() -> anyhow::Result<Vec<WithdrawalOrder>> {
    repository::list_all().await
}

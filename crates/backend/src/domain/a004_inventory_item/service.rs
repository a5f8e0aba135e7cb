use super::repository;
use crate::shared::error::{not_found, validation};
use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use contracts::shared::sample_data;
use uuid::Uuid;

/// Приход новой позиции на склад
pub async fn create(dto: InventoryItemDto) -> anyhow::Result<InventoryItem> {
    let mut aggregate = InventoryItem::new_for_insert(&dto);
    aggregate.validate().map_err(validation)?;

    if repository::get_by_item_number(aggregate.item_number())
        .await?
        .is_some()
    {
        return Err(validation(format!(
            "رقم الصنف \"{}\" مسجل مسبقاً",
            aggregate.item_number()
        )));
    }

    aggregate.before_write();
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: InventoryItemDto) -> anyhow::Result<InventoryItem> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;

    if let Some(other) = repository::get_by_item_number(aggregate.item_number()).await? {
        if other.base.id != aggregate.base.id {
            return Err(validation(format!(
                "رقم الصنف \"{}\" مسجل مسبقاً",
                aggregate.item_number()
            )));
        }
    }

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<InventoryItem> {
    repository::get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    let mut inserted = 0;
    for dto in sample_data::inventory_items() {
        if repository::get_by_item_number(&dto.item_number)
            .await?
            .is_some()
        {
            continue;
        }
        create(dto).await?;
        inserted += 1;
    }
    Ok(inserted)
}

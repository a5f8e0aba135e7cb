use super::repository;
use crate::shared::error::{not_found, validation};
use contracts::domain::a001_facility::aggregate::{Facility, FacilityDto};
use contracts::shared::sample_data;
use uuid::Uuid;

/// Регистрация новой медицинской организации
pub async fn create(dto: FacilityDto) -> anyhow::Result<Facility> {
    let mut aggregate = Facility::new_for_insert(&dto);

    aggregate.validate().map_err(validation)?;

    if repository::get_by_code(&aggregate.base.code).await?.is_some() {
        return Err(validation(format!(
            "رمز المنشأة \"{}\" مستخدم مسبقاً",
            aggregate.base.code
        )));
    }

    aggregate.before_write();
    repository::insert(&aggregate).await?;
    tracing::info!("Facility {} registered", aggregate.base.code);
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: FacilityDto) -> anyhow::Result<Facility> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;

    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;

    if let Some(other) = repository::get_by_code(&aggregate.base.code).await? {
        if other.base.id != aggregate.base.id {
            return Err(validation(format!(
                "رمز المنشأة \"{}\" مستخدم مسبقاً",
                aggregate.base.code
            )));
        }
    }

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление
pub async fn delete(id: Uuid) -> anyhow::Result<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Facility> {
    repository::get_by_id(id).await?.ok_or_else(not_found)
}

pub async fn list_all() -> anyhow::Result<Vec<Facility>> {
    repository::list_all().await
}

/// Вставка тестовых данных (пропускает уже существующие коды)
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let mut inserted = 0;
    for dto in sample_data::facilities() {
        let code = dto.code.clone().unwrap_or_default();
        if repository::get_by_code(&code).await?.is_some() {
            continue;
        }
        create(dto).await?;
        inserted += 1;
    }
    Ok(inserted)
}

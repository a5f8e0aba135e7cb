use axum::{extract::Path, Json};
use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};

use crate::domain::a004_inventory_item;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/inventory_item
pub async fn list_all() -> ApiResult<Vec<InventoryItem>> {
    respond(a004_inventory_item::service::list_all().await)
}

/// GET /api/inventory_item/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<InventoryItem> {
    let result = async { a004_inventory_item::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/inventory_item
pub async fn create(Json(dto): Json<InventoryItemDto>) -> ApiResult<InventoryItem> {
    respond_with_message(
        a004_inventory_item::service::create(dto).await,
        "تمت إضافة الصنف إلى المستودع",
    )
}

/// PUT /api/inventory_item/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<InventoryItemDto>,
) -> ApiResult<InventoryItem> {
    let result = async { a004_inventory_item::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// DELETE /api/inventory_item/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a004_inventory_item::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

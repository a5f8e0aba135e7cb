use axum::{extract::Path, Json};
use contracts::domain::a003_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::OrderStatus;

use crate::domain::a003_purchase_order;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/purchase_order
pub async fn list_all() -> ApiResult<Vec<PurchaseOrder>> {
    respond(a003_purchase_order::service::list_all().await)
}

/// GET /api/purchase_order/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<PurchaseOrder> {
    let result = async { a003_purchase_order::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/purchase_order
pub async fn create(Json(dto): Json<PurchaseOrderDto>) -> ApiResult<PurchaseOrder> {
    respond_with_message(
        a003_purchase_order::service::create(dto).await,
        "تم إنشاء أمر الشراء بنجاح",
    )
}

/// PUT /api/purchase_order/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<PurchaseOrderDto>,
) -> ApiResult<PurchaseOrder> {
    let result = async { a003_purchase_order::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// PUT /api/purchase_order/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(change): Json<StatusChangeDto<OrderStatus>>,
) -> ApiResult<PurchaseOrder> {
    let result =
        async { a003_purchase_order::service::change_status(parse_id(&id)?, change).await }.await;
    respond_with_message(result, "تم تحديث حالة الطلب")
}

/// DELETE /api/purchase_order/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a003_purchase_order::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

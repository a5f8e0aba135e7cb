use axum::{extract::Path, Json};
use contracts::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::OrderStatus;

use crate::domain::a007_dental_contract;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/dental_contract
pub async fn list_all() -> ApiResult<Vec<DentalContract>> {
    respond(a007_dental_contract::service::list_all().await)
}

/// GET /api/dental_contract/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<DentalContract> {
    let result = async { a007_dental_contract::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/dental_contract
pub async fn create(Json(dto): Json<DentalContractDto>) -> ApiResult<DentalContract> {
    respond_with_message(
        a007_dental_contract::service::create(dto).await,
        "تم إنشاء عقد طب الأسنان بنجاح",
    )
}

/// PUT /api/dental_contract/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<DentalContractDto>,
) -> ApiResult<DentalContract> {
    let result = async { a007_dental_contract::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// PUT /api/dental_contract/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(change): Json<StatusChangeDto<OrderStatus>>,
) -> ApiResult<DentalContract> {
    let result =
        async { a007_dental_contract::service::change_status(parse_id(&id)?, change).await }.await;
    respond_with_message(result, "تم تحديث حالة العقد")
}

/// DELETE /api/dental_contract/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a007_dental_contract::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

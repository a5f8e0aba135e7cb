use axum::{extract::Path, Json};
use contracts::domain::a001_facility::aggregate::{Facility, FacilityDto};

use crate::domain::a001_facility;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/facility
pub async fn list_all() -> ApiResult<Vec<Facility>> {
    respond(a001_facility::service::list_all().await)
}

/// GET /api/facility/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Facility> {
    let result = async { a001_facility::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/facility
pub async fn create(Json(dto): Json<FacilityDto>) -> ApiResult<Facility> {
    respond_with_message(
        a001_facility::service::create(dto).await,
        "تم تسجيل المنشأة بنجاح",
    )
}

/// PUT /api/facility/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<FacilityDto>) -> ApiResult<Facility> {
    let result = async { a001_facility::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// DELETE /api/facility/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a001_facility::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

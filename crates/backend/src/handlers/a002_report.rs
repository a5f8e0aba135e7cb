use axum::{extract::Path, Json};
use contracts::domain::a002_report::aggregate::{Report, ReportDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::ReportStatus;

use crate::domain::a002_report;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/report
pub async fn list_all() -> ApiResult<Vec<Report>> {
    respond(a002_report::service::list_all().await)
}

/// GET /api/report/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Report> {
    let result = async { a002_report::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/report
pub async fn create(Json(dto): Json<ReportDto>) -> ApiResult<Report> {
    respond_with_message(
        a002_report::service::create(dto).await,
        "تم إرسال البلاغ بنجاح",
    )
}

/// PUT /api/report/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<ReportDto>) -> ApiResult<Report> {
    let result = async { a002_report::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// PUT /api/report/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(change): Json<StatusChangeDto<ReportStatus>>,
) -> ApiResult<Report> {
    let result = async { a002_report::service::change_status(parse_id(&id)?, change).await }.await;
    respond(result)
}

/// DELETE /api/report/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a002_report::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

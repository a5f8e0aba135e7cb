use axum::{extract::Path, Json};
use contracts::domain::a006_transaction::aggregate::{
    Transaction, TransactionDto, TransactionHistoryEntry,
};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::TransactionStatus;

use crate::domain::a006_transaction;
use crate::shared::error::{parse_id, respond, respond_with_message, ApiResult};

/// GET /api/transaction
pub async fn list_all() -> ApiResult<Vec<Transaction>> {
    respond(a006_transaction::service::list_all().await)
}

/// GET /api/transaction/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Transaction> {
    let result = async { a006_transaction::service::get_by_id(parse_id(&id)?).await }.await;
    respond(result)
}

/// POST /api/transaction
pub async fn create(Json(dto): Json<TransactionDto>) -> ApiResult<Transaction> {
    respond_with_message(
        a006_transaction::service::create(dto).await,
        "تم تسجيل المعاملة بنجاح",
    )
}

/// PUT /api/transaction/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<TransactionDto>,
) -> ApiResult<Transaction> {
    let result = async { a006_transaction::service::update(parse_id(&id)?, dto).await }.await;
    respond(result)
}

/// PUT /api/transaction/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(change): Json<StatusChangeDto<TransactionStatus>>,
) -> ApiResult<Transaction> {
    let result =
        async { a006_transaction::service::change_status(parse_id(&id)?, change).await }.await;
    respond(result)
}

/// GET /api/transaction/:id/history
pub async fn history(Path(id): Path<String>) -> ApiResult<Vec<TransactionHistoryEntry>> {
    let result = async { a006_transaction::service::history(parse_id(&id)?).await }.await;
    respond(result)
}

/// DELETE /api/transaction/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<()> {
    let result = async { a006_transaction::service::delete(parse_id(&id)?).await }.await;
    respond(result)
}

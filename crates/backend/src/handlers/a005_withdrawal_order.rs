use axum::Json;
use contracts::domain::a005_withdrawal_order::aggregate::{
    WithdrawalOrder, WithdrawalOrderDto, WithdrawalResult,
};

use crate::domain::a005_withdrawal_order;
use crate::shared::error::{respond, respond_with_message, ApiResult};

/// GET /api/withdrawal_order
pub async fn list_all() -> ApiResult<Vec<WithdrawalOrder>> {
    respond(a005_withdrawal_order::service::list_all().await)
}

/// POST /api/withdrawal_order
pub async fn create(Json(dto): Json<WithdrawalOrderDto>) -> ApiResult<WithdrawalResult> {
    respond_with_message(
        a005_withdrawal_order::service::create(dto).await,
        "تم صرف الكمية بنجاح",
    )
}

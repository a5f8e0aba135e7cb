use crate::shared::error::{respond_with_message, ApiResult};
use crate::system::initialization::{self, SeedSummary};

/// POST /api/testdata
pub async fn insert_test_data() -> ApiResult<SeedSummary> {
    respond_with_message(
        initialization::seed_sample_data().await,
        "تمت إضافة البيانات التجريبية",
    )
}

use contracts::dashboards::d100_overview::DashboardStats;

use crate::dashboards::d100_overview;
use crate::shared::error::{respond, ApiResult};

/// GET /api/dashboard/stats
pub async fn get_stats() -> ApiResult<DashboardStats> {
    respond(d100_overview::service::get_stats().await)
}

use axum::extract::State;

use crate::database::models::DashboardStats;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::DashboardService;
use crate::state::AppState;

/// GET /api/dashboard/stats - Totals, active campaign count and recent donations
///
/// Expected Output:
/// ```json
/// {
///   "totalDonations": 1500.0,
///   "totalExpenses": 500.0,
///   "activeCampaigns": 2,
///   "recentDonations": [{ "id": "...", "amount": 250.0, "donor": {...}, "campaign": null, ... }]
/// }
/// ```
pub async fn stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let stats = DashboardService::new(state.pool.clone()).stats().await.map_err(|e| {
        tracing::error!(error = %e, "Dashboard aggregation failed");
        ApiError::StatsUnavailable
    })?;

    Ok(ApiResponse::success(stats))
}

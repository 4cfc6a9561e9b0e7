use axum::extract::State;

use crate::database::models::{Campaign, CampaignWithCounts};
use crate::database::CampaignRepository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{CampaignSchema, ValidatedJson};

/// GET /api/campaigns - All campaigns, newest first, each with `_count.donations`
/// and `_count.expenses`
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CampaignWithCounts>> {
    let campaigns = CampaignRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(campaigns))
}

/// POST /api/campaigns - Create a campaign; `status` defaults to ACTIVE
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CampaignSchema>,
) -> ApiResult<Campaign> {
    let campaign = CampaignRepository::new(state.pool.clone()).create(&input).await?;

    tracing::info!(campaign_id = %campaign.id, status = campaign.status.as_str(), "Campaign created");
    Ok(ApiResponse::created(campaign))
}

use axum::extract::State;

use crate::database::models::{Donor, DonorWithCount};
use crate::database::DonorRepository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{DonorSchema, ValidatedJson};

/// GET /api/donors - All donors, newest first, each with `_count.donations`
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<DonorWithCount>> {
    let donors = DonorRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(donors))
}

/// POST /api/donors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DonorSchema>,
) -> ApiResult<Donor> {
    let donor = DonorRepository::new(state.pool.clone()).create(&input).await?;

    tracing::info!(donor_id = %donor.id, "Donor created");
    Ok(ApiResponse::created(donor))
}

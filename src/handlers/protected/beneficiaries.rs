use axum::extract::State;

use crate::database::models::Beneficiary;
use crate::database::BeneficiaryRepository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{BeneficiarySchema, ValidatedJson};

/// GET /api/beneficiaries - All beneficiaries, newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Beneficiary>> {
    let beneficiaries = BeneficiaryRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(beneficiaries))
}

/// POST /api/beneficiaries
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<BeneficiarySchema>,
) -> ApiResult<Beneficiary> {
    let beneficiary = BeneficiaryRepository::new(state.pool.clone()).create(&input).await?;

    tracing::info!(beneficiary_id = %beneficiary.id, "Beneficiary created");
    Ok(ApiResponse::created(beneficiary))
}

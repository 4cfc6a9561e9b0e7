use axum::extract::State;

use crate::database::models::{Donation, DonationWithRelations};
use crate::database::DonationRepository;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{DonationSchema, ValidatedJson};

/// GET /api/donations - All donations, newest first, with `donor` and `campaign` joined
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<DonationWithRelations>> {
    let donations = DonationRepository::new(state.pool.clone()).list(None).await?;
    Ok(ApiResponse::success(donations))
}

/// POST /api/donations - Record a donation against an existing donor
///
/// An unknown `donorId` or `campaignId` violates a foreign key and surfaces
/// as a 500 persistence error.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DonationSchema>,
) -> ApiResult<Donation> {
    let donation = DonationRepository::new(state.pool.clone()).create(&input).await?;

    tracing::info!(
        donation_id = %donation.id,
        donor_id = %donation.donor_id,
        amount = donation.amount,
        "Donation recorded",
    );
    Ok(ApiResponse::created(donation))
}

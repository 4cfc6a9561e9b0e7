use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::database::models::{Expense, ExpenseWithCampaign};
use crate::database::ExpenseRepository;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{ExpenseSchema, ValidatedJson};

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: Uuid,
}

/// GET /api/expenses - All expenses, newest first, with `campaign` joined
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ExpenseWithCampaign>> {
    let expenses = ExpenseRepository::new(state.pool.clone()).list().await?;
    Ok(ApiResponse::success(expenses))
}

/// POST /api/expenses
///
/// Expected Input:
/// ```json
/// { "description": "Food", "amount": 500, "category": "Food", "campaignId": null }
/// ```
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ExpenseSchema>,
) -> ApiResult<Expense> {
    let expense = ExpenseRepository::new(state.pool.clone()).create(&input).await?;

    tracing::info!(expense_id = %expense.id, amount = expense.amount, "Expense created");
    Ok(ApiResponse::created(expense))
}

/// PUT /api/expenses/:id - Full-record update
///
/// Overwrites description, amount, category and campaignId. An omitted
/// campaignId detaches the expense from its campaign.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ExpenseSchema>,
) -> ApiResult<Expense> {
    let id = parse_expense_id(&id)?;
    let expense = ExpenseRepository::new(state.pool.clone()).update(id, &input).await?;

    tracing::info!(expense_id = %expense.id, "Expense updated");
    Ok(ApiResponse::success(expense))
}

/// DELETE /api/expenses/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<DeletedResponse> {
    let id = parse_expense_id(&id)?;
    ExpenseRepository::new(state.pool.clone()).delete(id).await?;

    tracing::info!(expense_id = %id, "Expense deleted");
    Ok(ApiResponse::success(DeletedResponse {
        message: "Expense deleted",
        id,
    }))
}

/// An id that cannot be a UUID cannot exist either
fn parse_expense_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Expense"))
}

// handlers/public/auth.rs - POST /api/auth/login

use axum::extract::State;
use serde::Serialize;

use crate::auth::{self, AuthError};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{LoginSchema, ValidatedJson};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /api/auth/login - Exchange a username/access-key pair for a bearer token
///
/// Expected Input:
/// ```json
/// { "username": "admin", "accessKey": "..." }
/// ```
///
/// Expected Output:
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiI...", "username": "admin" }
/// ```
///
/// 400 when either field is missing or not a string, 401 for any pair not on
/// the allow-list.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginSchema>,
) -> ApiResult<LoginResponse> {
    let issued = auth::login(&state.config.security, &input.username, &input.access_key).inspect_err(|e| {
        if matches!(e, AuthError::InvalidCredentials) {
            tracing::warn!(username = %input.username, "Rejected login attempt");
        }
    })?;

    tracing::info!(username = %issued.username, expires_at = %issued.expires_at, "Issued session token");

    Ok(ApiResponse::success(LoginResponse {
        token: issued.token,
        username: issued.username,
    }))
}

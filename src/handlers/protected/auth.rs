use axum::Extension;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponse {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// GET /api/auth/whoami - Who the bearer token belongs to and when it lapses
pub async fn whoami(Extension(user): Extension<AuthUser>) -> ApiResult<WhoamiResponse> {
    Ok(ApiResponse::success(WhoamiResponse {
        username: user.username,
        expires_at: user.expires_at,
    }))
}

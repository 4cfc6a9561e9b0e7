use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::state::AppState;

/// GET / - Service name, version and endpoint index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Ray of Hope Admin API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "login": "/api/auth/login (public - token acquisition)",
            "whoami": "/api/auth/whoami (protected)",
            "dashboard": "/api/dashboard/stats (protected)",
            "expenses": "/api/expenses[/:id] (protected)",
            "donations": "/api/donations (protected)",
            "campaigns": "/api/campaigns (protected)",
            "donors": "/api/donors (protected)",
            "beneficiaries": "/api/beneficiaries (protected)",
            "export": "/api/export/expenses (protected)",
        }
    }))
}

/// GET /health - Liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

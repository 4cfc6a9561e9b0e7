// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::database::DatabaseError;

/// One violated field constraint, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("Validation failed")]
    Validation { details: Vec<FieldViolation> },

    // 401 Unauthorized
    #[error("Invalid username or access key")]
    InvalidCredentials,

    #[error("Access token required")]
    MissingToken,

    // 403 Forbidden
    #[error("Invalid or expired token")]
    InvalidToken,

    // 404 Not Found
    #[error("{0} not found")]
    NotFound(&'static str),

    // 500 Internal Server Error
    #[error("Database error")]
    Persistence(#[source] sqlx::Error),

    #[error("Dashboard statistics unavailable")]
    StatsUnavailable,

    #[error("Failed to generate export")]
    Export(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn validation(details: Vec<FieldViolation>) -> Self {
        ApiError::Validation { details }
    }

    /// Single-entry validation error, used when the body cannot be read at all.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        ApiError::validation(vec![FieldViolation::new("body", message)])
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_)
            | ApiError::StatsUnavailable
            | ApiError::Export(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::MissingToken => "MISSING_TOKEN",
            ApiError::InvalidToken => "INVALID_TOKEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Persistence(_) => "PERSISTENCE_ERROR",
            ApiError::StatsUnavailable => "STATS_UNAVAILABLE",
            ApiError::Export(_) => "EXPORT_FAILED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log server-side detail for failures whose cause is never shown to the caller
    fn log(&self) {
        match self {
            ApiError::Persistence(err) => tracing::error!(error = %err, "Database error"),
            ApiError::Export(msg) => tracing::error!(error = %msg, "Export error"),
            ApiError::Internal(msg) => tracing::error!(error = %msg, "Internal error"),
            ApiError::StatsUnavailable => tracing::error!("Dashboard statistics unavailable"),
            _ => {}
        }
    }
}

// Convert other error types to ApiError
impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(entity) => ApiError::NotFound(entity),
            DatabaseError::Sqlx(sqlx_err) => ApiError::Persistence(sqlx_err),
            DatabaseError::Migration(migrate_err) => ApiError::internal(migrate_err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::MissingToken => ApiError::MissingToken,
            AuthError::InvalidToken(reason) => {
                tracing::debug!(%reason, "Rejected bearer token");
                ApiError::InvalidToken
            }
            AuthError::TokenGeneration(msg) => ApiError::internal(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::validation(crate::validation::violations_from(&errors))
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.log();

        let status = self.status_code();
        // Display strings never carry the wrapped source, so 500s stay generic
        let body = match &self {
            ApiError::Validation { details } => json!({
                "error": self.to_string(),
                "code": self.error_code(),
                "details": details,
            }),
            _ => json!({
                "error": self.to_string(),
                "code": self.error_code(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert_eq!(ApiError::invalid_body("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("Expense").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::StatsUnavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_not_found_becomes_404() {
        let err: ApiError = DatabaseError::NotFound("Expense").into();
        assert!(matches!(err, ApiError::NotFound("Expense")));
        assert_eq!(err.to_string(), "Expense not found");
    }

    #[test]
    fn persistence_message_hides_sql_detail() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Database error");
    }
}

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::services::export_service::{EXPENSES_FILENAME, XLSX_CONTENT_TYPE};
use crate::services::{ExportError, ExportService};
use crate::state::AppState;

/// GET /api/export/expenses - Every expense as an .xlsx attachment
///
/// Columns: Date, Description, Amount, Category, Campaign.
pub async fn expenses(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = ExportService::new(state.pool.clone())
        .expenses_workbook()
        .await
        .map_err(|e| match e {
            ExportError::Database(db) => ApiError::from(db),
            ExportError::Workbook(err) => ApiError::Export(err.to_string()),
        })?;

    tracing::info!(bytes = bytes.len(), "Expense export generated");

    let disposition = format!("attachment; filename=\"{}\"", EXPENSES_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

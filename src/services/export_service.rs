use rust_xlsxwriter::{Format, Workbook, XlsxError};
use sqlx::PgPool;

use crate::database::models::ExpenseExportRow;
use crate::database::{DatabaseError, ExpenseRepository};

pub const EXPENSES_FILENAME: &str = "expenses.xlsx";
pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const EXPENSE_SHEET_NAME: &str = "Expenses";
const EXPENSE_COLUMNS: [(&str, f64); 5] = [
    ("Date", 12.0),
    ("Description", 40.0),
    ("Amount", 14.0),
    ("Category", 20.0),
    ("Campaign", 30.0),
];
/// Campaign cell for expenses not tied to any campaign
pub const NO_CAMPAIGN: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("workbook generation failed: {0}")]
    Workbook(#[from] XlsxError),
}

pub struct ExportService {
    expenses: ExpenseRepository,
}

impl ExportService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            expenses: ExpenseRepository::new(pool),
        }
    }

    /// The full expense table as an .xlsx document, built fresh on every call
    pub async fn expenses_workbook(&self) -> Result<Vec<u8>, ExportError> {
        let rows = self.expenses.export_rows().await?;
        tracing::debug!(rows = rows.len(), "Building expense workbook");
        Ok(build_expense_workbook(&rows)?)
    }
}

/// Header row plus one row per expense: Date, Description, Amount, Category, Campaign.
pub fn build_expense_workbook(rows: &[ExpenseExportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPENSE_SHEET_NAME)?;

    for (col, (title, width)) in EXPENSE_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, *width)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = index as u32 + 1;
        worksheet.write_string(r, 0, row.created_at.date_naive().format("%Y-%m-%d").to_string())?;
        worksheet.write_string(r, 1, &row.description)?;
        worksheet.write_number_with_format(r, 2, row.amount, &money)?;
        worksheet.write_string(r, 3, &row.category)?;
        worksheet.write_string(r, 4, row.campaign_name.as_deref().unwrap_or(NO_CAMPAIGN))?;
    }

    workbook.save_to_buffer()
}

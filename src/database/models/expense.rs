use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use uuid::Uuid;

use super::Campaign;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub campaign_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "description",
        "amount",
        "category",
        "campaign_id",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseWithCampaign {
    #[serde(flatten)]
    pub expense: Expense,
    pub campaign: Option<Campaign>,
}

impl<'r> FromRow<'r, PgRow> for ExpenseWithCampaign {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            expense: Expense::from_row(row)?,
            campaign: Campaign::from_joined_row(row, "campaign")?,
        })
    }
}

/// One spreadsheet row: an expense plus the name of its campaign, if any.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ExpenseExportRow {
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub campaign_name: Option<String>,
}

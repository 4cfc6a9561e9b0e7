use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Campaign, Donor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub amount: f64,
    pub donor_id: Uuid,
    pub campaign_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Donation {
    pub const COLUMNS: &'static [&'static str] =
        &["id", "amount", "donor_id", "campaign_id", "created_at", "updated_at"];
}

/// Donation with its donor and (optional) campaign joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationWithRelations {
    #[serde(flatten)]
    pub donation: Donation,
    pub donor: Donor,
    pub campaign: Option<Campaign>,
}

impl<'r> FromRow<'r, PgRow> for DonationWithRelations {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            donation: Donation::from_row(row)?,
            donor: Donor::from_joined_row(row, "donor")?,
            campaign: Campaign::from_joined_row(row, "campaign")?,
        })
    }
}

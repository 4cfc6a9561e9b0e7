use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "campaign_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Paused => "PAUSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(CampaignStatus::Active),
            "COMPLETED" => Some(CampaignStatus::Completed),
            "PAUSED" => Some(CampaignStatus::Paused),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Option<f64>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "target_amount",
        "status",
        "created_at",
        "updated_at",
    ];

    /// Read a LEFT JOINed campaign selected with `joined_columns(prefix, ..)`.
    /// Returns `None` when the join found no campaign.
    pub fn from_joined_row(row: &PgRow, prefix: &str) -> Result<Option<Self>, sqlx::Error> {
        let col = |name: &str| format!("{prefix}.{name}");

        let Some(id) = row.try_get::<Option<Uuid>, _>(col("id").as_str())? else {
            return Ok(None);
        };

        Ok(Some(Self {
            id,
            name: row.try_get(col("name").as_str())?,
            description: row.try_get(col("description").as_str())?,
            target_amount: row.try_get(col("target_amount").as_str())?,
            status: row.try_get(col("status").as_str())?,
            created_at: row.try_get(col("created_at").as_str())?,
            updated_at: row.try_get(col("updated_at").as_str())?,
        }))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCounts {
    pub donations: i64,
    pub expenses: i64,
}

/// Campaign as listed: with the number of donations and expenses attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignWithCounts {
    #[serde(flatten)]
    pub campaign: Campaign,
    #[serde(rename = "_count")]
    pub counts: CampaignCounts,
}

impl<'r> FromRow<'r, PgRow> for CampaignWithCounts {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            campaign: Campaign::from_row(row)?,
            counts: CampaignCounts {
                donations: row.try_get("donation_count")?,
                expenses: row.try_get("expense_count")?,
            },
        })
    }
}

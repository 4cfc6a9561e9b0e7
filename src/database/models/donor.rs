use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Donor {
    pub const COLUMNS: &'static [&'static str] =
        &["id", "name", "email", "phone", "address", "created_at", "updated_at"];

    /// Read an inner-joined donor selected with `joined_columns(prefix, ..)`.
    pub fn from_joined_row(row: &PgRow, prefix: &str) -> Result<Self, sqlx::Error> {
        let col = |name: &str| format!("{prefix}.{name}");

        Ok(Self {
            id: row.try_get(col("id").as_str())?,
            name: row.try_get(col("name").as_str())?,
            email: row.try_get(col("email").as_str())?,
            phone: row.try_get(col("phone").as_str())?,
            address: row.try_get(col("address").as_str())?,
            created_at: row.try_get(col("created_at").as_str())?,
            updated_at: row.try_get(col("updated_at").as_str())?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorCounts {
    pub donations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorWithCount {
    #[serde(flatten)]
    pub donor: Donor,
    #[serde(rename = "_count")]
    pub counts: DonorCounts,
}

impl<'r> FromRow<'r, PgRow> for DonorWithCount {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            donor: Donor::from_row(row)?,
            counts: DonorCounts {
                donations: row.try_get("donation_count")?,
            },
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub contact_info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Beneficiary {
    pub const COLUMNS: &'static [&'static str] =
        &["id", "name", "description", "contact_info", "created_at", "updated_at"];
}

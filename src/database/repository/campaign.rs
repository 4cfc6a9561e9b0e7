use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{qualified_columns, Campaign, CampaignStatus, CampaignWithCounts};
use crate::validation::CampaignSchema;

pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All campaigns, newest first, with donation and expense counts
    pub async fn list(&self) -> Result<Vec<CampaignWithCounts>, DatabaseError> {
        let query = format!(
            "SELECT {cols}, \
                 (SELECT COUNT(*) FROM donations d WHERE d.campaign_id = c.id) AS donation_count, \
                 (SELECT COUNT(*) FROM expenses e WHERE e.campaign_id = c.id) AS expense_count \
             FROM campaigns c \
             ORDER BY c.created_at DESC",
            cols = qualified_columns("c", Campaign::COLUMNS)
        );
        let rows = sqlx::query_as::<_, CampaignWithCounts>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &CampaignSchema) -> Result<Campaign, DatabaseError> {
        let query = format!(
            "INSERT INTO campaigns (id, name, description, target_amount, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            Campaign::COLUMNS.join(", ")
        );
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.target_amount)
            .bind(input.status_or_default())
            .fetch_one(&self.pool)
            .await?;
        Ok(campaign)
    }

    pub async fn count_by_status(&self, status: CampaignStatus) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

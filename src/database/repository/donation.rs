use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{joined_columns, qualified_columns, Campaign, Donation, DonationWithRelations, Donor};
use crate::validation::DonationSchema;

pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Donations newest first with donor and campaign joined in.
    /// `limit = None` returns every row.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<DonationWithRelations>, DatabaseError> {
        let query = format!(
            "SELECT {donation}, {donor}, {campaign} \
             FROM donations d \
             JOIN donors donor ON donor.id = d.donor_id \
             LEFT JOIN campaigns campaign ON campaign.id = d.campaign_id \
             ORDER BY d.created_at DESC \
             LIMIT $1",
            donation = qualified_columns("d", Donation::COLUMNS),
            donor = joined_columns("donor", Donor::COLUMNS),
            campaign = joined_columns("campaign", Campaign::COLUMNS),
        );
        let rows = sqlx::query_as::<_, DonationWithRelations>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &DonationSchema) -> Result<Donation, DatabaseError> {
        let query = format!(
            "INSERT INTO donations (id, amount, donor_id, campaign_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            Donation::COLUMNS.join(", ")
        );
        let donation = sqlx::query_as::<_, Donation>(&query)
            .bind(Uuid::new_v4())
            .bind(input.amount)
            .bind(input.donor_uuid())
            .bind(input.campaign_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(donation)
    }

    /// Sum of every donation amount; 0 when there are none
    pub async fn total_amount(&self) -> Result<f64, DatabaseError> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM donations")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

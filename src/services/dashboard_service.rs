use sqlx::PgPool;

use crate::database::models::{CampaignStatus, DashboardStats};
use crate::database::{CampaignRepository, DatabaseError, DonationRepository, ExpenseRepository};

/// Number of donations shown in the dashboard's "recent" list
pub const RECENT_DONATION_LIMIT: i64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Dashboard statistics unavailable: {0}")]
    Unavailable(#[from] DatabaseError),
}

pub struct DashboardService {
    donations: DonationRepository,
    expenses: ExpenseRepository,
    campaigns: CampaignRepository,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            donations: DonationRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            campaigns: CampaignRepository::new(pool),
        }
    }

    /// Run the four independent aggregates concurrently. Any failure fails the
    /// whole call; partial stats are never returned.
    pub async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        let (total_donations, total_expenses, active_campaigns, recent_donations) = tokio::try_join!(
            self.donations.total_amount(),
            self.expenses.total_amount(),
            self.campaigns.count_by_status(CampaignStatus::Active),
            self.donations.list(Some(RECENT_DONATION_LIMIT)),
        )?;

        Ok(DashboardStats {
            total_donations,
            total_expenses,
            active_campaigns,
            recent_donations,
        })
    }
}

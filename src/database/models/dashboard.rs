use serde::{Deserialize, Serialize};

use super::DonationWithRelations;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_donations: f64,
    pub total_expenses: f64,
    pub active_campaigns: i64,
    /// Newest first, at most five
    pub recent_donations: Vec<DonationWithRelations>,
}

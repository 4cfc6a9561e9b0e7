pub mod beneficiary;
pub mod campaign;
pub mod dashboard;
pub mod donation;
pub mod donor;
pub mod expense;

pub use beneficiary::Beneficiary;
pub use campaign::{Campaign, CampaignCounts, CampaignStatus, CampaignWithCounts};
pub use dashboard::DashboardStats;
pub use donation::{Donation, DonationWithRelations};
pub use donor::{Donor, DonorCounts, DonorWithCount};
pub use expense::{Expense, ExpenseExportRow, ExpenseWithCampaign};

/// `alias.col AS "alias.col"` for every column, so joined rows keep their
/// columns apart from the base table's.
pub(crate) fn joined_columns(alias: &str, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{alias}.{c} AS \"{alias}.{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `alias.col` for every column.
pub(crate) fn qualified_columns(alias: &str, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{alias}.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

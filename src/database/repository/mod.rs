//! Per-entity data access. Each repository owns a pool handle and exposes
//! only the operations its entity supports through the API.

mod beneficiary;
mod campaign;
mod donation;
mod donor;
mod expense;

pub use beneficiary::BeneficiaryRepository;
pub use campaign::CampaignRepository;
pub use donation::DonationRepository;
pub use donor::DonorRepository;
pub use expense::ExpenseRepository;

// handlers/protected/mod.rs - endpoints behind jwt_auth_middleware
//
// Every handler here can assume an `AuthUser` extension is present.
pub mod auth;
pub mod beneficiaries;
pub mod campaigns;
pub mod dashboard;
pub mod donations;
pub mod donors;
pub mod expenses;
pub mod export;

// handlers/mod.rs - two security tiers
//
// Public (no auth): service info, health, login
// Protected (bearer JWT): every entity, dashboard and export route under /api
pub mod protected;
pub mod public;

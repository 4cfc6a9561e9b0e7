// handlers/public/mod.rs - endpoints reachable without a token
pub mod auth;
pub mod root;

pub use auth::login;
pub use root::{health, root};

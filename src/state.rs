use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state handed to every handler via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the config is behind `Arc`.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

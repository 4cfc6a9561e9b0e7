use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rayhope_api::config::AppConfig;
use rayhope_api::database::DatabaseManager;
use rayhope_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rayhope_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(environment = ?config.environment, "Starting Ray of Hope API");

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::migrate(&pool).await.context("failed to run migrations")?;

    let bind_addr = config.bind_addr();
    let app = rayhope_api::app(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(addr = %bind_addr, "Listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Inventory service entry point
///
/// - config/: environment-driven settings (server, CORS, database, codec)
/// - setup/: dependency wiring and HTTP server
/// - api/: route handlers, DTOs and the response envelope
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env().context("invalid configuration")?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database)
        .await
        .context("database initialization failed")?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.codec);

    // 6. Run server
    Server::run(config, container).await
}

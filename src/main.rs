//! Sitekit server: marketing-site content backend.
//!
//! Entry point that loads configuration, connects the database, runs
//! migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use sitekit_core::config::AppConfig;
use sitekit_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SITEKIT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Connect, migrate, serve, and close the pool on the way out.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        "Starting Sitekit"
    );

    let db_pool = sitekit_database::connection::create_pool(&config.database).await?;
    sitekit_database::migration::run_migrations(&db_pool).await?;

    let result = sitekit_api::run_server(config, db_pool.clone()).await;

    sitekit_database::connection::close_pool(&db_pool).await;
    result
}

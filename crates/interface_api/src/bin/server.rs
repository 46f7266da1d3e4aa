//! Slip API Server Binary
//!
//! This binary starts the HTTP API server for slips.
//!
//! # Usage
//!
//! ```bash
//! META_DATABASE_NAME=meta META_DATABASE_USER=meta META_DATABASE_PASSWORD=secret \
//!     cargo run --bin slip-api
//! ```
//!
//! See `interface_api::config` for every variable and its default. The
//! `slips` table must already exist (`migrations/` at the workspace root).

use std::sync::Arc;

use anyhow::Context;
use domain_slip::SlipService;
use infra_db::{create_pool, ping, SlipRepository};
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, connects to the database and
/// serves until Ctrl+C or SIGTERM. Any failure before the listener is bound
/// aborts the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("configuration rejected")?;

    init_tracing(&config.log_level);

    tracing::info!(
        address = %config.server_listen_address,
        port = config.server_listen_port,
        "Starting slip API server"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %format!("{e:#}"), "Server failed");
        return Err(e);
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let database_config = config.database_config()?;
    let pool = create_pool(database_config)
        .await
        .context("failed to connect to database")?;

    ping(&pool).await.context("database did not answer")?;
    tracing::info!("Database ready");

    let service = SlipService::new(Arc::new(SlipRepository::new(pool)));
    let app = create_router(service);

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

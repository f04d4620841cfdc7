//! Company and Employee Directory - API Server Binary
//!
//! This binary starts the HTTP API server for the directory.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (in-memory store)
//! cargo run --bin directory-api
//!
//! # Run against PostgreSQL
//! APP_STORE_BACKEND=postgres APP_DATABASE_URL=postgres://... cargo run --bin directory-api
//! ```
//!
//! # Environment Variables
//!
//! * `APP_HOST` - Server host (default: 0.0.0.0)
//! * `APP_PORT` - Server port (default: 8080)
//! * `APP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `APP_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `APP_STORE_BACKEND` - `memory`, `file` or `postgres` (default: memory)
//! * `APP_DATA_DIR` - Directory for the file backend (default: data)
//! * `APP_DATABASE_URL` - PostgreSQL connection string
//! * `APP_DB_MAX_CONNECTIONS` / `APP_DB_MIN_CONNECTIONS` - Pool size (default: 5 / 0)
//! * `APP_DB_CONNECT_TIMEOUT_SECS` - Acquire timeout (default: 10)
//! * `APP_DB_IDLE_TIMEOUT_SECS` - Idle connection lifetime (default: 300)
//! * `APP_TIMESTAMP_POLICY` - `server_stamped` or `trusted` (default: server_stamped)
//! * `RUST_LOG` - Overrides `APP_LOG_LEVEL` when set

use anyhow::Context;
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires the configured store
/// backend, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The store backend cannot be opened
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid APP_* configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.store_backend,
        "Starting directory API server"
    );

    let state = AppState::from_config(&config)
        .await
        .context("failed to open store backend")?;

    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level when `RUST_LOG` is unset
/// * `format` - Human-readable or JSON output
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
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

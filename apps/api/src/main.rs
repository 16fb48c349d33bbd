//! # Shipment API
//!
//! Starts the HTTP server.
//!
//! ## Startup
//! ```text
//! .env (optional) ──► ApiConfig ──► pricing rules ──► Database + migrations
//!                                                          │
//!                                                          ▼
//!                                   axum::serve (graceful shutdown on signal)
//! ```

use std::sync::Arc;

use anyhow::Context;
use shipment_api::{create_router, ApiConfig, AppState};
use shipment_core::{IsoCountries, PricingEngine};
use shipment_db::{Database, DbConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal; anything else is worth a warning once
    // logging is up.
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to load .env file");
        }
    }

    info!("Starting shipment API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.socket_addr(),
        db_path = %config.database_path.display(),
        rules = ?config.pricing_rules_path,
        "Configuration loaded"
    );

    let rules = config.pricing_rules()?;
    let engine = PricingEngine::new(Arc::new(rules), Arc::new(IsoCountries));
    let loaded = engine.rules();
    info!(
        nordic = ?loaded.region.nordic,
        european_factor = loaded.region.european_factor,
        rest_of_world_factor = loaded.region.rest_of_world_factor,
        weight_bands = loaded.weight.bands().len(),
        "Pricing rules loaded"
    );

    // Connect to database (runs migrations)
    let db_config = DbConfig::new(config.database_path.clone())
        .max_connections(config.database_max_connections);
    let db = Database::new(db_config)
        .await
        .context("failed to open shipment database")?;

    let app = create_router(AppState::new(engine, db.clone()));

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;
    info!(addr = %config.socket_addr(), "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// If a handler can't be installed that branch simply never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

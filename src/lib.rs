//! # Lotto Picker
//!
//! An unbiased lottery number draw service.
//!
//! - **Sampling engine**: rejection-sampled uniform integers and partial
//!   Fisher–Yates draws of distinct numbers from a range minus exclusions
//! - **Reveal planning**: machine preview balls, ball colours, and the staged
//!   reveal timeline a client animates
//! - **HTTP API**: draw, validate, and random-integer endpoints plus health,
//!   readiness, and Prometheus metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Lotto Picker                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────┐  ┌────────┐  │
//! │  │  API Layer  │  │   Service   │  │ Sampling │  │ Domain │  │
//! │  │   (Axum)    │→ │    Layer    │→ │  Engine  │  │ Models │  │
//! │  └─────────────┘  └─────────────┘  └──────────┘  └────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod sampling;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the lottery picker service.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Installs the Prometheus recorder
/// 3. Starts the HTTP server
/// 4. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The metrics recorder cannot be installed
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Lotto Picker"
    );

    // Create application state
    let mut state = AppState::new(Arc::new(config.clone()));

    if config.observability.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        state = state.with_metrics(handle);
        info!(path = %config.observability.metrics_path, "Metrics recorder installed");
    }

    if config.ui.enabled {
        info!(path = %config.ui.path.display(), "Serving static front end");
    }

    // Create router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

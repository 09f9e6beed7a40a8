//! Readiness - Component readiness dashboard service
//!
//! Serves the per-test readiness grid as JSON and as a server-rendered page
//! whose cells deep-link into the test details report.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod grid;

pub use config::{load_config, Config};
pub use error::{ReadinessError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::grid::{load_grid, ReadinessGrid};

/// Load the grid named by the configuration, or an empty one
pub fn load_configured_grid(config: &Config) -> Result<ReadinessGrid> {
    match &config.grid.data_path {
        Some(path) => {
            tracing::debug!("Loading grid from {:?}", path);
            load_grid(path)
        }
        None => {
            tracing::warn!("No grid data file configured, serving an empty grid");
            Ok(ReadinessGrid::default())
        }
    }
}

/// Run the readiness service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let grid = Arc::new(load_configured_grid(&config)?);
    let summary = grid.summary();
    tracing::info!(
        "Grid loaded: {} regressed, {} without regression, {} without data",
        summary.regressions,
        summary.other,
        summary.no_data
    );

    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let router = dashboard::build_router(grid, &config.dashboard);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ReadinessError::Dashboard(format!(
            "Failed to bind dashboard to port {}: {}",
            config.dashboard.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Readiness service stopped");
    Ok(())
}

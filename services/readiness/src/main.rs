//! Readiness CLI
//!
//! Command-line interface for the component readiness dashboard service.

use std::path::PathBuf;

use clap::Parser;
use readiness::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "readiness")]
#[command(about = "Component readiness dashboard service")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid data file (overrides config file)
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, grid={:?}, port={:?}, log_level={:?}",
        args.config,
        args.grid,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(grid) = args.grid {
        config.grid.data_path = Some(grid);
    }
    if let Some(port) = args.port {
        config.dashboard.port = port;
    }

    tracing::info!("Starting readiness service");
    readiness::run(config).await?;

    Ok(())
}

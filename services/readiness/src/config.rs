//! Configuration types for the readiness service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
    /// Router base the report links are served under
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Filter context used when the index page is requested without a query
    #[serde(default)]
    pub default_filter_vals: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
            base_path: default_base_path(),
            default_filter_vals: String::new(),
        }
    }
}

/// Where the readiness grid comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridConfig {
    /// JSON grid file; without one the dashboard starts empty
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

fn default_dashboard_port() -> u16 {
    11120
}

fn default_base_path() -> String {
    readiness_app::report_link::DASHBOARD_PREFIX.to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ReadinessError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

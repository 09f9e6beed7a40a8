//! Error types for the readiness service

/// Errors that can occur in the readiness service
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid error: {0}")]
    Grid(String),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for readiness operations
pub type Result<T> = std::result::Result<T, ReadinessError>;

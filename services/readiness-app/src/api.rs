//! Client-side API types
//!
//! These types mirror the server-side JSON response structures
//! and are shared between the service and client-side hydration.

use serde::{Deserialize, Serialize};

/// Readiness grid as returned by /api/grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridResponse {
    /// Router base the report links are served under (e.g. "/sippy-ng")
    pub base_path: String,
    /// Column headers, one environment descriptor per column
    pub environments: Vec<String>,
    pub rows: Vec<TestRowResponse>,
}

/// One test row of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRowResponse {
    pub test_id: String,
    pub test_name: String,
    pub component: String,
    pub capability: String,
    /// Severity code per environment column; `None` means no data
    pub statuses: Vec<Option<i32>>,
}

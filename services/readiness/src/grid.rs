//! Readiness grid data: one row per test, one status per environment

use std::path::Path;

use readiness_app::api::{GridResponse, TestRowResponse};
use readiness_app::report_link::TestCoordinates;
use readiness_app::severity::Severity;
use serde::{Deserialize, Serialize};

use crate::{ReadinessError, Result};

/// Results of one test across all environment columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRow {
    pub test_id: String,
    pub test_name: String,
    pub component: String,
    pub capability: String,
    #[serde(default)]
    pub statuses: Vec<Option<i32>>,
}

/// The full grid as produced by the regression analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessGrid {
    #[serde(default)]
    pub environments: Vec<String>,
    #[serde(default)]
    pub rows: Vec<TestRow>,
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub row: &'a TestRow,
    pub environment: &'a str,
    pub status: Option<i32>,
}

impl Cell<'_> {
    pub fn coordinates(&self) -> TestCoordinates {
        TestCoordinates {
            test_id: self.row.test_id.clone(),
            environment: self.environment.to_string(),
            component: self.row.component.clone(),
            capability: self.row.capability.clone(),
            test_name: self.row.test_name.clone(),
        }
    }
}

/// Cell counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub no_data: usize,
    pub regressions: usize,
    pub other: usize,
}

impl ReadinessGrid {
    /// Check that every row has exactly one status per environment
    pub fn validate(&self) -> Result<()> {
        for row in &self.rows {
            if row.statuses.len() != self.environments.len() {
                return Err(ReadinessError::Grid(format!(
                    "row '{}' has {} statuses for {} environments",
                    row.test_id,
                    row.statuses.len(),
                    self.environments.len()
                )));
            }
        }
        Ok(())
    }

    /// Cells of one row, left to right
    pub fn row_cells<'a>(&'a self, row: &'a TestRow) -> impl Iterator<Item = Cell<'a>> {
        self.environments
            .iter()
            .zip(row.statuses.iter())
            .map(move |(environment, status)| Cell {
                row,
                environment,
                status: *status,
            })
    }

    /// Iterate cells row by row, left to right
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.rows.iter().flat_map(move |row| self.row_cells(row))
    }

    pub fn summary(&self) -> GridSummary {
        self.cells()
            .fold(GridSummary::default(), |mut summary, cell| {
                match cell.status.map(Severity::from_code) {
                    None => summary.no_data += 1,
                    Some(s) if s.is_regression() => summary.regressions += 1,
                    Some(_) => summary.other += 1,
                }
                summary
            })
    }

    /// JSON shape served to the frontend
    pub fn to_response(&self, base_path: &str) -> GridResponse {
        GridResponse {
            base_path: base_path.to_string(),
            environments: self.environments.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| TestRowResponse {
                    test_id: row.test_id.clone(),
                    test_name: row.test_name.clone(),
                    component: row.component.clone(),
                    capability: row.capability.clone(),
                    statuses: row.statuses.clone(),
                })
                .collect(),
        }
    }
}

/// Load and validate a grid from a JSON file
pub fn load_grid(path: &Path) -> Result<ReadinessGrid> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ReadinessError::Grid(format!("Failed to read grid file {:?}: {}", path, e))
    })?;
    let grid: ReadinessGrid = serde_json::from_str(&content)?;
    grid.validate()?;
    tracing::debug!(
        "Loaded grid from {:?}: {} tests x {} environments",
        path,
        grid.rows.len(),
        grid.environments.len()
    );
    Ok(grid)
}

//! BDD test world for the readiness service

use cucumber::World;
use readiness::config::DashboardConfig;
use readiness::grid::ReadinessGrid;
use readiness_app::nav::{MemoryQueryStore, MemoryRedirector, NavigationOutcome};
use readiness_app::report_link::TestCoordinates;

#[derive(Debug, Default, World)]
pub struct ReadinessWorld {
    // Dashboard testing
    pub grid: ReadinessGrid,
    pub dashboard_config: DashboardConfig,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,

    // Report link testing
    pub coords: TestCoordinates,
    pub filter_vals: String,
    pub report_path: Option<String>,
    pub store: MemoryQueryStore,
    pub redirector: MemoryRedirector,
    pub outcome: Option<NavigationOutcome>,
}

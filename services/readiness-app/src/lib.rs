//! Component Readiness Dashboard - Leptos frontend
//!
//! Renders the per-test readiness grid and builds the deep links into the
//! test details report.

pub mod api;
pub mod app;
pub mod components;
pub mod nav;
pub mod report_link;
pub mod severity;

pub use app::App;

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}

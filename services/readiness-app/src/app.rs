//! Main App component

use crate::components::grid_table::GridTable;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component Readiness" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
                <h1>"Component Readiness"</h1>
                <GridTable />
            </main>
        </Router>
    }
}

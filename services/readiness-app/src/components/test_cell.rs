//! One result cell of the readiness grid

use crate::components::severity_icon::SeverityIcon;
use crate::nav::{navigate, NavigationIntent, NavigationOutcome};
use crate::report_link::{
    build_test_report_path, report_href, TestCoordinates, DASHBOARD_PREFIX,
};
use leptos::prelude::*;

pub const NO_DATA_TOOLTIP: &str = "No data";

const DISABLED_COLOR: &str = "rgba(0, 0, 0, 0.38)";

/// Which of the two cell renderings a status selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    NoData,
    HasData(i32),
}

impl CellView {
    pub fn for_status(status: Option<i32>) -> Self {
        match status {
            None => CellView::NoData,
            Some(code) => CellView::HasData(code),
        }
    }
}

/// Status cell for one (test, environment) pair.
///
/// Cells with data link to the test details report. A plain click syncs the
/// navigation query parameters and redirects the page; a click with a
/// new-tab modifier is left to the browser.
#[component]
pub fn TestCell(
    status: Option<i32>,
    environment: String,
    test_id: String,
    filter_vals: String,
    component: String,
    capability: String,
    test_name: String,
    #[prop(default = DASHBOARD_PREFIX.to_string())] base_path: String,
) -> impl IntoView {
    let coords = TestCoordinates {
        test_id,
        environment,
        component,
        capability,
        test_name,
    };

    match CellView::for_status(status) {
        CellView::NoData => {
            let style = format!("text-align: center; background-color: {};", DISABLED_COLOR);
            let icon_style = format!("font-size: 1.4em; color: {};", DISABLED_COLOR);
            view! {
                <td class="cr-cell-result" style=style title=NO_DATA_TOOLTIP>
                    <span style=icon_style aria-label=NO_DATA_TOOLTIP>"\u{2753}"</span>
                </td>
            }
            .into_any()
        }
        CellView::HasData(code) => {
            let href = report_href(&base_path, &build_test_report_path(&coords, &filter_vals));
            let on_click = move |ev: leptos::ev::MouseEvent| {
                let intent =
                    NavigationIntent::from_modifiers(ev.meta_key(), ev.ctrl_key(), ev.shift_key());
                if intent == NavigationIntent::NavigateReplace {
                    ev.prevent_default();
                }
                follow_report_link(intent, &coords, &filter_vals, &base_path);
            };

            view! {
                <td class="cr-cell-result" style="text-align: center; background-color: white;">
                    <a href=href on:click=on_click>
                        <SeverityIcon status=code />
                    </a>
                </td>
            }
            .into_any()
        }
    }
}

fn follow_report_link(
    intent: NavigationIntent,
    coords: &TestCoordinates,
    filter_vals: &str,
    base_path: &str,
) -> NavigationOutcome {
    #[cfg(feature = "hydrate")]
    {
        use crate::nav::browser::{AddressBarStore, LocationRedirector};
        navigate(
            intent,
            coords,
            filter_vals,
            base_path,
            &mut AddressBarStore,
            &mut LocationRedirector,
        )
    }

    // Click events only fire after hydration; elsewhere nothing leaves memory
    #[cfg(not(feature = "hydrate"))]
    {
        use crate::nav::{MemoryQueryStore, MemoryRedirector};
        navigate(
            intent,
            coords,
            filter_vals,
            base_path,
            &mut MemoryQueryStore::default(),
            &mut MemoryRedirector::default(),
        )
    }
}

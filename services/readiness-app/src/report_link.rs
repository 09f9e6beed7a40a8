//! Deep links into the test details report
//!
//! Every link carries the active filter context plus the five values that
//! identify a grid cell, so reloading the resulting address rebuilds the
//! same view.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::nav::NavParam;

/// Route of the test details report, relative to the dashboard base path
pub const TEST_DETAILS_ROUTE: &str = "/component_readiness/test_details";

/// Base path the dashboard router is mounted under
pub const DASHBOARD_PREFIX: &str = "/sippy-ng";

/// Environment descriptor used by the grid for columns without data
pub const NO_DATA: &str = "No data";

/// Everything except `A-Z a-z 0-9 - _ . ~` gets escaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The values identifying one cell of the readiness grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCoordinates {
    pub test_id: String,
    pub environment: String,
    pub component: String,
    pub capability: String,
    pub test_name: String,
}

/// Percent-encode a single query value.
///
/// Stricter than the browser's `encodeURIComponent`: `!`, `'`, `(`, `)` and
/// `*` are escaped as well.
pub fn safe_encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Filter context as a `?`-led query string, even when no filter is active
pub fn filter_context(query: &str) -> String {
    format!("?{}", query.trim_start_matches('?'))
}

/// Keys the report link sets itself; environment tokens may not repeat them
fn is_link_param(key: &str) -> bool {
    NavParam::ALL.iter().any(|p| p.key() == key)
}

/// Expand an environment descriptor into its query fragment.
///
/// `"Platform:aws Network:ovn"` becomes
/// `&environment=Platform%3Aaws%20Network%3Aovn&platform=aws&network=ovn`.
/// Tokens without a `:`, or whose key names one of the link's own
/// parameters, only contribute to the `environment` parameter.
pub fn expand_environment(environment: &str) -> String {
    if environment.trim().is_empty() || environment.trim() == NO_DATA {
        return String::new();
    }

    let mut fragment = format!("&environment={}", safe_encode_uri_component(environment));
    for token in environment.split_whitespace() {
        if let Some((key, value)) = token.split_once(':') {
            let key = key.to_lowercase();
            if key.is_empty() || is_link_param(&key) {
                continue;
            }
            fragment.push_str(&format!(
                "&{}={}",
                safe_encode_uri_component(&key),
                safe_encode_uri_component(value)
            ));
        }
    }
    fragment
}

/// Build the test details path for a cell, relative to the dashboard base.
///
/// `filter_vals` is appended untouched. `capability` is inserted without
/// escaping; callers are expected to pass URL-safe capability names.
pub fn build_test_report_path(coords: &TestCoordinates, filter_vals: &str) -> String {
    let mut path = String::from(TEST_DETAILS_ROUTE);
    path.push_str(filter_vals);
    path.push_str("&test_id=");
    path.push_str(&safe_encode_uri_component(&coords.test_id));
    path.push_str(&expand_environment(&coords.environment));
    path.push_str("&component=");
    path.push_str(&safe_encode_uri_component(&coords.component));
    path.push_str("&capability=");
    path.push_str(&coords.capability);
    path.push_str("&test_name=");
    path.push_str(&safe_encode_uri_component(&coords.test_name));
    path
}

/// Join a router base path with a report path
pub fn report_href(base_path: &str, report_path: &str) -> String {
    format!("{}{}", base_path.trim_end_matches('/'), report_path)
}

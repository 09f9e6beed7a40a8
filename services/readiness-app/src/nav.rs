//! Navigation state shared through the address bar
//!
//! Following a report link writes the cell's identifiers into the query
//! parameters below before the page moves on, so the next view starts from
//! the same filter context.

use std::collections::BTreeMap;

use crate::report_link::{build_test_report_path, report_href, TestCoordinates};

/// Query parameters owned by the readiness views
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NavParam {
    Component,
    Capability,
    Environment,
    TestId,
    TestName,
}

impl NavParam {
    pub const ALL: [NavParam; 5] = [
        NavParam::Component,
        NavParam::Capability,
        NavParam::Environment,
        NavParam::TestId,
        NavParam::TestName,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NavParam::Component => "component",
            NavParam::Capability => "capability",
            NavParam::Environment => "environment",
            NavParam::TestId => "test_id",
            NavParam::TestName => "test_name",
        }
    }
}

/// Per-key access to the navigation query parameters
#[cfg_attr(test, mockall::automock)]
pub trait QueryStore {
    fn get(&self, key: NavParam) -> Option<String>;

    fn set(&mut self, key: NavParam, value: &str);
}

/// Full-page location changes
#[cfg_attr(test, mockall::automock)]
pub trait Redirector {
    fn redirect(&mut self, href: &str);
}

/// What the user asked for when activating a report link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Modifier held: let the browser open the link in a new tab or window
    NavigateNewContext,
    /// Plain activation: sync navigation state and redirect this page
    NavigateReplace,
}

impl NavigationIntent {
    /// Meta (macOS) or Ctrl (everywhere else) opens a new tab, Shift a new window
    pub fn from_modifiers(meta_key: bool, ctrl_key: bool, shift_key: bool) -> Self {
        if meta_key || ctrl_key || shift_key {
            NavigationIntent::NavigateNewContext
        } else {
            NavigationIntent::NavigateReplace
        }
    }
}

/// Result of [`navigate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Nothing was touched; the link's default behaviour applies
    DefaultNavigation,
    /// Navigation state was written and the page sent to this address
    Redirected(String),
}

/// Follow a report link for `coords`.
///
/// A new-context intent is left to the browser. Otherwise the five cell
/// identifiers are written to `store` and `redirector` is sent to
/// `base_path` joined with the report path.
pub fn navigate<S, R>(
    intent: NavigationIntent,
    coords: &TestCoordinates,
    filter_vals: &str,
    base_path: &str,
    store: &mut S,
    redirector: &mut R,
) -> NavigationOutcome
where
    S: QueryStore + ?Sized,
    R: Redirector + ?Sized,
{
    if intent == NavigationIntent::NavigateNewContext {
        return NavigationOutcome::DefaultNavigation;
    }

    store.set(NavParam::Component, &coords.component);
    store.set(NavParam::Capability, &coords.capability);
    store.set(NavParam::TestId, &coords.test_id);
    store.set(NavParam::Environment, &coords.environment);
    store.set(NavParam::TestName, &coords.test_name);

    let href = report_href(base_path, &build_test_report_path(coords, filter_vals));
    redirector.redirect(&href);
    NavigationOutcome::Redirected(href)
}

/// In-memory query store used outside the browser
#[derive(Debug, Clone, Default)]
pub struct MemoryQueryStore {
    params: BTreeMap<NavParam, String>,
}

impl MemoryQueryStore {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl QueryStore for MemoryQueryStore {
    fn get(&self, key: NavParam) -> Option<String> {
        self.params.get(&key).cloned()
    }

    fn set(&mut self, key: NavParam, value: &str) {
        self.params.insert(key, value.to_string());
    }
}

/// Records redirects instead of performing them
#[derive(Debug, Clone, Default)]
pub struct MemoryRedirector {
    pub visited: Vec<String>,
}

impl Redirector for MemoryRedirector {
    fn redirect(&mut self, href: &str) {
        self.visited.push(href.to_string());
    }
}

#[cfg(feature = "hydrate")]
pub mod browser {
    //! Address bar and location backed implementations

    use leptos::logging::warn;
    use wasm_bindgen::JsValue;

    use super::{NavParam, QueryStore, Redirector};

    /// Reads and rewrites the current page's query string in place
    #[derive(Debug, Default)]
    pub struct AddressBarStore;

    impl QueryStore for AddressBarStore {
        fn get(&self, key: NavParam) -> Option<String> {
            let search = web_sys::window()?.location().search().ok()?;
            web_sys::UrlSearchParams::new_with_str(&search)
                .ok()?
                .get(key.key())
        }

        fn set(&mut self, key: NavParam, value: &str) {
            let Some(window) = web_sys::window() else {
                warn!("no window, dropping {}", key.key());
                return;
            };
            let url = match window.location().href().and_then(|h| web_sys::Url::new(&h)) {
                Ok(url) => url,
                Err(e) => {
                    warn!("cannot read location: {:?}", e);
                    return;
                }
            };
            url.search_params().set(key.key(), value);
            let href = url.href();

            let result = window.history().and_then(|history| {
                history.replace_state_with_url(&JsValue::NULL, "", Some(href.as_str()))
            });
            if let Err(e) = result {
                warn!("cannot update {}: {:?}", key.key(), e);
            }
        }
    }

    /// Sends the whole page to a new address
    #[derive(Debug, Default)]
    pub struct LocationRedirector;

    impl Redirector for LocationRedirector {
        fn redirect(&mut self, href: &str) {
            let result = web_sys::window()
                .ok_or_else(|| JsValue::from_str("no window"))
                .and_then(|window| window.location().set_href(href));
            if let Err(e) = result {
                warn!("redirect to {} failed: {:?}", href, e);
            }
        }
    }
}

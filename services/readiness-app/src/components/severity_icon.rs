//! Severity icon component

use crate::severity::Severity;
use leptos::prelude::*;

/// Glyph for a severity code, coloured by how bad it is
#[component]
pub fn SeverityIcon(status: i32) -> impl IntoView {
    let severity = Severity::from_code(status);

    let style = format!(
        "display: inline-block; font-size: 1.4em; line-height: 1; color: {};",
        severity.color()
    );
    let label = severity.to_string();

    view! {
        <span style=style title=label.clone() aria-label=label>{severity.glyph()}</span>
    }
}

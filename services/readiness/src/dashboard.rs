//! Web dashboard with JSON API endpoints and a server-rendered grid

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::Method;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use readiness_app::components::test_cell::NO_DATA_TOOLTIP;
use readiness_app::report_link::{build_test_report_path, filter_context, report_href};
use readiness_app::severity::Severity;
use tower_http::cors::{Any, CorsLayer};

use crate::config::DashboardConfig;
use crate::grid::{Cell, ReadinessGrid};

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub grid: Arc<ReadinessGrid>,
    pub base_path: String,
    pub default_filter_vals: String,
}

/// Build the dashboard axum router
pub fn build_router(grid: Arc<ReadinessGrid>, config: &DashboardConfig) -> Router {
    let dashboard_state = DashboardState {
        grid,
        base_path: config.base_path.clone(),
        default_filter_vals: config.default_filter_vals.clone(),
    };

    let api = Router::new().route("/api/grid", get(grid_handler)).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET]),
    );

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api)
        .with_state(dashboard_state)
}

/// Filter context for the page: the request's own query, else the default.
/// Always `?`-led so the report link keeps its parameters in the query.
pub fn filter_vals_for_request(query: Option<&str>, default_filter_vals: &str) -> String {
    match query.map(|q| q.trim_start_matches('?')) {
        Some(q) if !q.is_empty() => filter_context(q),
        _ => filter_context(default_filter_vals),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_cell(cell: &Cell<'_>, filter_vals: &str, base_path: &str) -> String {
    match cell.status {
        None => format!(
            r#"<td class="cr-cell-result" title="{tooltip}" style="text-align: center; background-color: rgba(0, 0, 0, 0.38);"><span style="font-size: 1.4em; color: rgba(0, 0, 0, 0.38);">&#x2753;</span></td>"#,
            tooltip = NO_DATA_TOOLTIP
        ),
        Some(code) => {
            let severity = Severity::from_code(code);
            let href = report_href(
                base_path,
                &build_test_report_path(&cell.coordinates(), filter_vals),
            );
            format!(
                r#"<td class="cr-cell-result" style="text-align: center; background-color: white;"><a href="{href}"><span style="display: inline-block; font-size: 1.4em; line-height: 1; color: {color};" title="{label}">{glyph}</span></a></td>"#,
                href = escape_html(&href),
                color = severity.color(),
                label = escape_html(&severity.to_string()),
                glyph = severity.glyph(),
            )
        }
    }
}

async fn index_handler(
    State(dashboard): State<DashboardState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let grid = &dashboard.grid;
    let filter_vals = filter_vals_for_request(query.as_deref(), &dashboard.default_filter_vals);
    tracing::debug!("Rendering grid with filter context '{}'", filter_vals);

    let header_cells: String = grid
        .environments
        .iter()
        .map(|env| {
            format!(
                r#"<th style="padding: 0.5rem; text-align: center;">{}</th>"#,
                escape_html(env)
            )
        })
        .collect();

    let rows: String = grid
        .rows
        .iter()
        .map(|row| {
            let rendered: String = grid
                .row_cells(row)
                .map(|c| render_cell(&c, &filter_vals, &dashboard.base_path))
                .collect();
            format!(
                r#"<tr style="border-bottom: 1px solid #dee2e6;">
                    <td style="padding: 0.5rem;">{}</td>{}
                </tr>"#,
                escape_html(&row.test_name),
                rendered
            )
        })
        .collect();

    let summary = grid.summary();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Component Readiness</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
    <h1>Component Readiness</h1>
    <p>{regressions} regressed, {other} without regression, {no_data} without data</p>
    <section>
        <table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="border-bottom: 2px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">Test</th>{header_cells}
                </tr>
            </thead>
            <tbody id="grid-body">{rows}</tbody>
        </table>
    </section>
</body>
</html>"#,
        regressions = summary.regressions,
        other = summary.other,
        no_data = summary.no_data,
        header_cells = header_cells,
        rows = rows,
    );

    Html(html)
}

async fn grid_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    axum::Json(dashboard.grid.to_response(&dashboard.base_path))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

//! BDD step definitions for dashboard feature

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use readiness::dashboard::build_router;
use readiness::grid::TestRow;

use crate::world::ReadinessWorld;

#[given("an empty readiness grid")]
fn empty_grid(world: &mut ReadinessWorld) {
    world.grid = Default::default();
}

#[given(expr = "a readiness grid with environment {string}")]
fn grid_with_environment(world: &mut ReadinessWorld, environment: String) {
    world.grid.environments = vec![environment];
}

#[given(expr = "the dashboard default filter context {string}")]
fn default_filter_context(world: &mut ReadinessWorld, filter_vals: String) {
    world.dashboard_config.default_filter_vals = filter_vals;
}

#[given(
    expr = "a test {string} named {string} in component {string} capability {string} with status {int}"
)]
fn test_with_status(
    world: &mut ReadinessWorld,
    test_id: String,
    test_name: String,
    component: String,
    capability: String,
    status: i32,
) {
    let width = world.grid.environments.len();
    world.grid.rows.push(TestRow {
        test_id,
        test_name,
        component,
        capability,
        statuses: vec![Some(status); width],
    });
}

#[given(
    expr = "a test {string} named {string} in component {string} capability {string} without data"
)]
fn test_without_data(
    world: &mut ReadinessWorld,
    test_id: String,
    test_name: String,
    component: String,
    capability: String,
) {
    let width = world.grid.environments.len();
    world.grid.rows.push(TestRow {
        test_id,
        test_name,
        component,
        capability,
        statuses: vec![None; width],
    });
}

#[when(expr = "{string} is requested")]
async fn request_path(world: &mut ReadinessWorld, uri: String) {
    let app = build_router(Arc::new(world.grid.clone()), &world.dashboard_config);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut ReadinessWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut ReadinessWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut ReadinessWorld, unexpected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

//! BDD step definitions for following report links

use cucumber::{given, then, when};

use readiness_app::nav::{navigate, NavParam, NavigationIntent, NavigationOutcome, QueryStore};
use readiness_app::report_link::{build_test_report_path, DASHBOARD_PREFIX};

use crate::world::ReadinessWorld;

fn parse_param(s: &str) -> NavParam {
    match s {
        "component" => NavParam::Component,
        "capability" => NavParam::Capability,
        "environment" => NavParam::Environment,
        "test_id" => NavParam::TestId,
        "test_name" => NavParam::TestName,
        other => panic!("Unknown navigation parameter: {}", other),
    }
}

#[given(
    expr = "the cell identifiers test id {string}, environment {string}, component {string}, capability {string}, test name {string}"
)]
fn cell_identifiers(
    world: &mut ReadinessWorld,
    test_id: String,
    environment: String,
    component: String,
    capability: String,
    test_name: String,
) {
    world.coords.test_id = test_id;
    world.coords.environment = environment;
    world.coords.component = component;
    world.coords.capability = capability;
    world.coords.test_name = test_name;
}

#[given(expr = "the filter context {string}")]
fn filter_context(world: &mut ReadinessWorld, filter_vals: String) {
    world.filter_vals = filter_vals;
}

#[when("the report path is built")]
fn build_path(world: &mut ReadinessWorld) {
    world.report_path = Some(build_test_report_path(&world.coords, &world.filter_vals));
}

fn click(world: &mut ReadinessWorld, meta_key: bool, ctrl_key: bool, shift_key: bool) {
    let intent = NavigationIntent::from_modifiers(meta_key, ctrl_key, shift_key);
    let outcome = navigate(
        intent,
        &world.coords,
        &world.filter_vals,
        DASHBOARD_PREFIX,
        &mut world.store,
        &mut world.redirector,
    );
    world.outcome = Some(outcome);
}

#[when("the cell is clicked without a modifier")]
fn plain_click(world: &mut ReadinessWorld) {
    click(world, false, false, false);
}

#[when("the cell is clicked with the meta key held")]
fn meta_click(world: &mut ReadinessWorld) {
    click(world, true, false, false);
}

#[when("the cell is clicked with the ctrl key held")]
fn ctrl_click(world: &mut ReadinessWorld) {
    click(world, false, true, false);
}

#[when("the cell is clicked with the shift key held")]
fn shift_click(world: &mut ReadinessWorld) {
    click(world, false, false, true);
}

#[then(expr = "the report path should start with {string}")]
fn path_starts_with(world: &mut ReadinessWorld, expected: String) {
    let path = world.report_path.as_ref().expect("report path not built");
    assert!(
        path.starts_with(&expected),
        "Expected '{}' to start with '{}'",
        path,
        expected
    );
}

#[then(expr = "the report path should contain {string}")]
fn path_contains(world: &mut ReadinessWorld, expected: String) {
    let path = world.report_path.as_ref().expect("report path not built");
    assert!(
        path.contains(&expected),
        "Expected '{}' to contain '{}'",
        path,
        expected
    );
}

#[then(expr = "the navigation state {string} should be {string}")]
fn navigation_state_is(world: &mut ReadinessWorld, key: String, expected: String) {
    assert_eq!(world.store.get(parse_param(&key)), Some(expected));
}

#[then("the navigation state should be empty")]
fn navigation_state_empty(world: &mut ReadinessWorld) {
    assert!(world.store.is_empty());
}

#[then(expr = "the page should be redirected to a path starting with {string}")]
fn redirected_to(world: &mut ReadinessWorld, expected: String) {
    assert_eq!(world.redirector.visited.len(), 1);
    assert!(
        world.redirector.visited[0].starts_with(&expected),
        "Expected redirect '{}' to start with '{}'",
        world.redirector.visited[0],
        expected
    );
}

#[then("the page should not be redirected")]
fn not_redirected(world: &mut ReadinessWorld) {
    assert!(world.redirector.visited.is_empty());
    assert_eq!(world.outcome, Some(NavigationOutcome::DefaultNavigation));
}

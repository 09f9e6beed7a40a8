//! BDD step definitions for the readiness service

pub mod dashboard_steps;
pub mod link_steps;

//! Health check endpoint for container orchestration.
//!
//! A liveness probe for Kubernetes and load balancers: it only checks that the
//! process can answer HTTP, and reports which version and host answered.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::snapshot::{hostname, timestamp_now};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub version: String,
    pub hostname: String,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        timestamp: timestamp_now(),
        version: state.config.deployment.version.clone(),
        hostname: hostname(),
    })
}

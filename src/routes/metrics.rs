//! Illustrative metrics endpoint.
//!
//! The values are fixed demo numbers for dashboards and workshops, not live
//! telemetry.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReport {
    pub requests_total: u64,
    pub uptime_seconds: u64,
    pub memory_usage_mb: u64,
    pub cpu_usage_percent: f64,
}

pub const DEMO_METRICS: MetricsReport = MetricsReport {
    requests_total: 100,
    uptime_seconds: 3600,
    memory_usage_mb: 128,
    cpu_usage_percent: 5.2,
};

pub async fn metrics() -> Json<MetricsReport> {
    Json(DEMO_METRICS)
}

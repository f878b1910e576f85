//! Deployment snapshot shown on the info page.
//!
//! Captured fresh for every request. Host facts never fail: anything that
//! cannot be read is reported as `"unknown"`.

use std::ffi::OsString;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{DeploymentConfig, UNKNOWN_PLACEHOLDER};

/// Identifies the running server binary.
pub const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Host and deployment facts at a single point in time.
///
/// Field order is the display order on the info page.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentSnapshot {
    pub hostname: String,
    pub version: String,
    pub environment: String,
    pub platform: String,
    pub architecture: String,
    pub runtime_version: String,
    pub timestamp: String,
}

/// One row of the info table.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotRow<'a> {
    pub key: &'static str,
    pub value: &'a str,
}

impl DeploymentSnapshot {
    pub fn capture(deployment: &DeploymentConfig) -> Self {
        Self {
            hostname: hostname(),
            version: deployment.version.clone(),
            environment: deployment.environment.clone(),
            platform: platform().to_string(),
            architecture: architecture().to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
            timestamp: timestamp_now(),
        }
    }

    pub fn rows(&self) -> Vec<SnapshotRow<'_>> {
        vec![
            SnapshotRow { key: "hostname", value: &self.hostname },
            SnapshotRow { key: "version", value: &self.version },
            SnapshotRow { key: "environment", value: &self.environment },
            SnapshotRow { key: "platform", value: &self.platform },
            SnapshotRow { key: "architecture", value: &self.architecture },
            SnapshotRow { key: "runtime_version", value: &self.runtime_version },
            SnapshotRow { key: "timestamp", value: &self.timestamp },
        ]
    }
}

/// Current UTC time as an RFC 3339 string with microsecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Kernel hostname of the machine or pod.
pub fn hostname() -> String {
    hostname_or_placeholder(::hostname::get())
}

fn hostname_or_placeholder(lookup: std::io::Result<OsString>) -> String {
    lookup
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string())
}

/// Operating system name in `uname -s` style.
pub fn platform() -> &'static str {
    platform_name(std::env::consts::OS)
}

fn platform_name(os: &'static str) -> &'static str {
    match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "" => UNKNOWN_PLACEHOLDER,
        other => other,
    }
}

pub fn architecture() -> &'static str {
    match std::env::consts::ARCH {
        "" => UNKNOWN_PLACEHOLDER,
        arch => arch,
    }
}

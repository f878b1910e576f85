//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, then applies
//! environment overrides (`APP_VERSION`, `ENVIRONMENT`). `AppConfig` is the
//! root configuration struct and is immutable once `load` returns.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pages::Page;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Content pages are constant for the lifetime of a deployment, so upstream
// caches may hold them briefly. Anything that reflects the clock or the host
// must never be cached.

/// Static content pages
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_PAGE: &str = formatcp!("public, max-age={}", HTTP_CACHE_PAGE_MAX_AGE);

/// Health, info and API responses
pub const CACHE_CONTROL_DYNAMIC: &str = "no-store";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides `deployment.version`
pub const ENV_APP_VERSION: &str = "APP_VERSION";

/// Overrides `deployment.environment`
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_VERSION: &str = "1.0.0";

pub const DEFAULT_ENVIRONMENT: &str = "development";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 5000;

pub const DEFAULT_SITE_NAME: &str = "DevOps Learning App";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "devops_learning=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Placeholder for host facts that cannot be read
pub const UNKNOWN_PLACEHOLDER: &str = "unknown";

/// Seconds to wait for open connections on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Version and environment shown on every page
    #[serde(default)]
    pub deployment: DeploymentConfig,
    /// Which pages this revision serves
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` when defaults were used
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Deployment identity rendered into the navigation badge and footer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeploymentConfig {
    #[serde(default = "DeploymentConfig::default_version")]
    pub version: String,
    #[serde(default = "DeploymentConfig::default_environment")]
    pub environment: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            environment: Self::default_environment(),
        }
    }
}

impl DeploymentConfig {
    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }

    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }
}

/// Page set for this revision.
///
/// `enabled` decides which routes exist at all; `coming_soon` marks enabled
/// pages whose content is replaced by the placeholder fragment. The home page
/// is always served.
#[derive(Debug, Clone, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "PagesConfig::default_enabled")]
    pub enabled: Vec<Page>,
    #[serde(default)]
    pub coming_soon: Vec<Page>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            coming_soon: Vec::new(),
        }
    }
}

impl PagesConfig {
    fn default_enabled() -> Vec<Page> {
        Page::ALL.to_vec()
    }

    pub fn is_enabled(&self, page: Page) -> bool {
        page == Page::Home || self.enabled.contains(&page)
    }

    pub fn is_coming_soon(&self, page: Page) -> bool {
        self.coming_soon.contains(&page)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Title shown in the browser tab and the navigation bar.
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Directory of template overrides; embedded templates fill any gaps.
    #[serde(default)]
    pub templates_dir: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            templates_dir: None,
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load configuration from `path`, then apply environment overrides.
    ///
    /// A missing file is only an error when `required` is set; otherwise the
    /// built-in defaults are used and `source` stays `None`.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => Self {
                source: Some(path.to_path_buf()),
                ..Self::from_toml_str(&contents)?
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Self::default(),
            Err(e) => return Err(e.into()),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `APP_VERSION` and `ENVIRONMENT` from the given lookup.
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup(ENV_APP_VERSION).filter(|v| !v.is_empty()) {
            self.deployment.version = version;
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT).filter(|v| !v.is_empty()) {
            self.deployment.environment = environment;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(page) = self
            .pages
            .coming_soon
            .iter()
            .find(|page| !self.pages.is_enabled(**page))
        {
            return Err(ConfigError::Validation(format!(
                "page '{}' is listed in pages.coming_soon but not in pages.enabled",
                page.slug()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.deployment.version, "1.0.0");
        assert_eq!(config.deployment.environment, "development");
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.pages.enabled.len(), Page::ALL.len());
        assert!(config.pages.coming_soon.is_empty());
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.ui.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn test_parse_pages_section() {
        let config = AppConfig::from_toml_str(
            r#"
            [pages]
            enabled = ["devops-concepts", "kong"]
            coming_soon = ["kong"]
            "#,
        )
        .unwrap();
        assert!(config.pages.is_enabled(Page::Home));
        assert!(config.pages.is_enabled(Page::DevopsConcepts));
        assert!(!config.pages.is_enabled(Page::Kubernetes));
        assert!(config.pages.is_coming_soon(Page::Kong));
    }

    #[test]
    fn test_coming_soon_must_be_enabled() {
        let err = AppConfig::from_toml_str(
            r#"
            [pages]
            enabled = ["kubernetes"]
            coming_soon = ["alibaba-ack"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_page_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [pages]
            enabled = ["nomad"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| match key {
            ENV_APP_VERSION => Some("9.9.9".to_string()),
            ENV_ENVIRONMENT => Some("staging".to_string()),
            _ => None,
        });
        assert_eq!(config.deployment.version, "9.9.9");
        assert_eq!(config.deployment.environment, "staging");
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|_| Some(String::new()));
        assert_eq!(config.deployment.version, DEFAULT_VERSION);
        assert_eq!(config.deployment.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [http]
            port = 8080

            [deployment]
            version = "2.3.4"

            [logging]
            format = "json"
            "#
        )
        .unwrap();

        let config = AppConfig::load(file.path(), true).unwrap();
        assert_eq!(config.source.as_deref(), Some(file.path()));
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            AppConfig::load(&path, true),
            Err(ConfigError::Io(_))
        ));
        let config = AppConfig::load(&path, false).unwrap();
        assert!(config.source.is_none());
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }
}

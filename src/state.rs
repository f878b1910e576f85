//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::pages::PageRegistry;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub pages: Arc<PageRegistry>,
}

impl AppState {
    /// Creates the state, deriving the page registry from `config.pages`.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        let pages = PageRegistry::from_config(&config.pages);
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            pages: Arc::new(pages),
        }
    }
}

//! DevOps Learning App
//!
//! A small web application that renders DevOps and Kubernetes learning pages
//! into a shared shell, plus health, deployment-info and demo metrics
//! endpoints for cluster walkthroughs.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod snapshot;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::{AppError, AppErrorResponse};
pub use routes::create_router;
pub use state::AppState;

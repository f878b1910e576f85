//! HTTP server module.
//!
//! Serves the router over plain HTTP and drains open connections on
//! SIGTERM/SIGINT so rolling deployments don't drop requests.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

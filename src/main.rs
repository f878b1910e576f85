//! DevOps Learning App entry point.
//!
//! Initializes tracing, loads configuration (TOML file plus environment
//! overrides), builds the template engine and page registry, sets up the Axum
//! router and serves it until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devops_learning::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use devops_learning::http::start_server;
use devops_learning::routes::create_router;
use devops_learning::state::AppState;
use devops_learning::templates::init_templates;

/// DevOps Learning App: Kubernetes and DevOps concepts over HTTP
#[derive(Parser, Debug)]
#[command(name = "devops-learning", version, about)]
struct Args {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "devops_learning=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit --config must exist; the default path is optional
    let (config_path, required) = match args.config {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_PATH.to_string(), false),
    };
    let mut config = AppConfig::load(&config_path, required)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    match &config.source {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration file"),
        None => tracing::info!(path = %config_path, "No config file, using defaults"),
    }
    tracing::info!(
        version = %config.deployment.version,
        environment = %config.deployment.environment,
        "Deployment configured"
    );

    let tera = init_templates(&config.ui)?;
    tracing::info!("Initialized templates");

    let state = AppState::new(config, tera);
    tracing::info!(
        pages = ?state.pages.entries().iter().map(|e| e.page.slug()).collect::<Vec<_>>(),
        "Registered pages"
    );

    let app = create_router(state.clone());
    start_server(app, &state.config.http).await?;

    Ok(())
}

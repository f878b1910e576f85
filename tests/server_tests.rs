//! End-to-end tests against a real listening server.
//!
//! Each test binds an ephemeral port, serves the router on it and talks plain
//! HTTP/1.1 over a TCP socket.
//!
//! Run with: cargo test --test server_tests
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use devops_learning::config::AppConfig;
use devops_learning::{create_router, AppState};

/// Start a server for `config` and return its address.
async fn spawn_server(config: AppConfig) -> SocketAddr {
    let tera = devops_learning::templates::init_templates(&config.ui).unwrap();
    let app = create_router(AppState::new(config, tera));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Config as it would be loaded with APP_VERSION=9.9.9 and ENVIRONMENT=staging.
fn staging_config(toml: &str) -> AppConfig {
    let mut config = AppConfig::from_toml_str(toml).unwrap();
    config.apply_env_overrides(|key| match key {
        "APP_VERSION" => Some("9.9.9".to_string()),
        "ENVIRONMENT" => Some("staging".to_string()),
        _ => None,
    });
    config
}

/// Send a GET and return (status line, raw response).
async fn http_get(addr: SocketAddr, path: &str) -> (String, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8_lossy(&raw).into_owned();
    let status_line = raw.lines().next().unwrap_or_default().to_string();
    (status_line, raw)
}

#[tokio::test]
async fn test_badge_reflects_environment_overrides() {
    let addr = spawn_server(staging_config("")).await;

    for path in ["/", "/devops-concepts", "/kubernetes", "/ingress", "/kong", "/ack", "/info"] {
        let (status, raw) = http_get(addr, path).await;
        assert!(status.contains("200"), "{path}: {status}");
        assert!(raw.contains("v9.9.9 | staging"), "{path}");
    }
}

#[tokio::test]
async fn test_health_over_tcp() {
    let addr = spawn_server(staging_config("")).await;

    let (status, raw) = http_get(addr, "/health").await;
    assert!(status.contains("200"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.contains(r#""status":"healthy""#));
    assert!(raw.contains(r#""version":"9.9.9""#));
}

#[tokio::test]
async fn test_revision_without_kong() {
    let addr = spawn_server(staging_config(
        r#"
        [pages]
        enabled = ["devops-concepts", "kubernetes", "ingress-gateway", "alibaba-ack"]
        coming_soon = ["alibaba-ack"]
        "#,
    ))
    .await;

    let (status, _) = http_get(addr, "/kong").await;
    assert!(status.contains("404"), "{status}");

    let (status, raw) = http_get(addr, "/ack").await;
    assert!(status.contains("200"));
    assert!(raw.contains("Coming soon"));
}

#[tokio::test]
async fn test_unknown_path() {
    let addr = spawn_server(staging_config("")).await;
    let (status, _) = http_get(addr, "/does-not-exist").await;
    assert!(status.contains("404"), "{status}");
}

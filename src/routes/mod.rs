//! HTTP route handlers.
//!
//! Content pages come from the page registry and share a short public
//! Cache-Control. Health, info and API endpoints reflect the clock or the
//! host and are never cached.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod info;
pub mod metrics;
pub mod pages;

use axum::{middleware, response::Html, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_DYNAMIC, CACHE_CONTROL_PAGE};
use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::{request_id_layer, RequestId};
use crate::state::AppState;

/// Build the template context shared by every page rendered in the shell.
///
/// `active` is the navigation href highlighted in the menu.
pub fn shell_context(state: &AppState, title: &str, active: &str) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("site_name", &state.config.ui.site_name);
    context.insert("version", &state.config.deployment.version);
    context.insert("environment", &state.config.deployment.environment);
    context.insert("nav", &state.pages.nav_links());
    context.insert("title", title);
    context.insert("active", active);
    context
}

/// Render a template, tagging failures with the request ID.
pub fn render(
    state: &AppState,
    template: &str,
    context: &tera::Context,
    request_id: &RequestId,
) -> Result<Html<String>, AppErrorResponse> {
    let html = state
        .tera
        .render(template, context)
        .map_err(AppError::from)
        .with_request_id(request_id)?;
    Ok(Html(html))
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Content pages - every canonical path and alias of each routed page
    let mut page_routes = Router::new();
    for entry in state.pages.entries() {
        for path in entry.paths() {
            page_routes = page_routes.route(path, get(pages::show));
        }
    }
    let page_routes = page_routes.layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_PAGE),
    ));

    // Health, deployment info and API - always fresh
    let dynamic_routes = Router::new()
        .route("/health", get(health::health))
        .route("/info", get(info::info))
        .route("/api/info", get(info::info_json))
        .route("/api/metrics", get(metrics::metrics))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DYNAMIC),
        ));

    Router::new()
        .merge(page_routes)
        .merge(dynamic_routes)
        .fallback(pages::not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, content_type, get};
    use crate::middleware::REQUEST_ID_HEADER;
    use http::StatusCode;

    #[tokio::test]
    async fn test_every_route_succeeds() {
        let html_routes = [
            "/",
            "/devops-concepts",
            "/kubernetes",
            "/ingress-gateway",
            "/ingress",
            "/kong",
            "/alibaba-ack",
            "/ack",
            "/info",
        ];
        for path in html_routes {
            let (status, headers, _) = get(app(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(content_type(&headers).starts_with("text/html"), "{path}");
        }

        for path in ["/health", "/api/info", "/api/metrics"] {
            let (status, headers, _) = get(app(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(content_type(&headers).starts_with("application/json"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_badge_on_every_page() {
        for path in ["/", "/kubernetes", "/kong", "/info", "/does-not-exist"] {
            let (_, _, body) = get(app(), path).await;
            assert!(body.contains("v9.9.9 | staging"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_cache_headers() {
        let (_, headers, _) = get(app(), "/kong").await;
        assert_eq!(headers.get("cache-control").unwrap(), "public, max-age=60");

        let (_, headers, _) = get(app(), "/health").await;
        assert_eq!(headers.get("cache-control").unwrap(), "no-store");
    }

    #[tokio::test]
    async fn test_request_id_header() {
        let (_, headers, _) = get(app(), "/").await;
        let id = headers.get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}

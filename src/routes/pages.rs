//! Content page handlers.

use axum::{
    extract::{MatchedPath, State},
    http::StatusCode,
    response::Html,
    Extension,
};
use tracing::instrument;

use super::{render, shell_context};
use crate::error::AppErrorResponse;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::templates::NOT_FOUND_TEMPLATE;

/// Render the fragment registered for the matched path inside the shell.
#[instrument(name = "pages::show", skip(state, request_id, path), fields(path = %path.as_str()))]
pub async fn show(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: MatchedPath,
) -> Result<(StatusCode, Html<String>), AppErrorResponse> {
    let Some(entry) = state.pages.resolve(path.as_str()) else {
        return render_not_found(&state, &request_id);
    };

    tracing::debug!(page = entry.page.slug(), fragment = ?entry.fragment, "Rendering page");

    let context = shell_context(&state, entry.page.title(), entry.page.path());
    let html = render(&state, entry.template(), &context, &request_id)?;
    Ok((StatusCode::OK, html))
}

/// Fallback for unknown paths.
pub async fn not_found(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<(StatusCode, Html<String>), AppErrorResponse> {
    render_not_found(&state, &request_id)
}

fn render_not_found(
    state: &AppState,
    request_id: &RequestId,
) -> Result<(StatusCode, Html<String>), AppErrorResponse> {
    let context = shell_context(state, "Page Not Found", "");
    let html = render(state, NOT_FOUND_TEMPLATE, &context, request_id)?;
    Ok((StatusCode::NOT_FOUND, html))
}

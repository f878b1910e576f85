//! Deployment information page.

use axum::{extract::State, response::Html, Extension, Json};
use tracing::instrument;

use super::{render, shell_context};
use crate::error::AppErrorResponse;
use crate::middleware::RequestId;
use crate::snapshot::DeploymentSnapshot;
use crate::state::AppState;
use crate::templates::INFO_TEMPLATE;

/// Render a fresh deployment snapshot as a table.
#[instrument(name = "info::info", skip(state, request_id))]
pub async fn info(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let snapshot = DeploymentSnapshot::capture(&state.config.deployment);

    let mut context = shell_context(&state, "Deployment Information", "/info");
    context.insert("rows", &snapshot.rows());

    render(&state, INFO_TEMPLATE, &context, &request_id)
}

/// Same snapshot as JSON.
pub async fn info_json(State(state): State<AppState>) -> Json<DeploymentSnapshot> {
    Json(DeploymentSnapshot::capture(&state.config.deployment))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, get};
    use http::StatusCode;

    #[tokio::test]
    async fn test_info_page_embeds_deployment() {
        let (status, _, body) = get(app(), "/info").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>9.9.9</td>"));
        assert!(body.contains("<td>staging</td>"));
        assert!(body.contains("<td>runtime version</td>"));
        assert!(body.contains("Deployment Information"));
    }

    #[tokio::test]
    async fn test_info_json() {
        let (status, _, body) = get(app(), "/api/info").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["version"], "9.9.9");
        assert_eq!(json["environment"], "staging");
        for key in ["hostname", "platform", "architecture", "runtime_version", "timestamp"] {
            assert!(json[key].is_string(), "missing {key}");
        }
    }
}

//! JSON handlers for the non-page routes.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use super::AppState;

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

/// GET /healthz — proxied backend health probe.
pub(super) async fn healthz(State(state): State<AppState>) -> Response {
    match state.client.health().await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => {
            warn!("backend health probe failed: {e}");
            (StatusCode::BAD_GATEWAY, json_error("backend_unreachable", e)).into_response()
        }
    }
}

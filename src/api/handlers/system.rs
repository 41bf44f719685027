//! System endpoints: landing page, manifest, health check.

use axum::Json;
use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use utoipa::OpenApi;

use crate::api::docs::ApiDoc;
use crate::api::dto::HealthResponse;
use crate::app_state::AppState;
use crate::ws::handler::accept_listener;

/// HTML served at `/` to plain browser requests.
pub const LANDING_PAGE: &str = concat!(
    "<!doctype html>",
    "<meta name=viewport content=\"width=device-width,initial-scale=1\">",
    "<title>Scene Relay</title>",
    "<h1>Scene Relay</h1>",
    "<p>Public URL printed in the server log.</p>",
    "<p><a href=\"/openapi.json\">OpenAPI</a></p>",
);

/// `GET /` — Landing page, or a WebSocket upgrade when requested.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Landing page",
    description = "Serves a small HTML page. Requests carrying WebSocket upgrade headers are accepted as listeners instead.",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
        (status = 101, description = "Switched to WebSocket"),
    )
)]
pub async fn landing_handler(
    State(state): State<AppState>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    match ws {
        Ok(ws) => accept_listener(ws, &state),
        Err(_) => Html(LANDING_PAGE).into_response(),
    }
}

/// `GET /openapi.json` — The static OpenAPI manifest.
///
/// The file is served verbatim. When it cannot be read, the document
/// generated from the handler annotations is served instead.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "System",
    summary = "OpenAPI manifest",
    description = "Returns the OpenAPI manifest describing the command routes.",
    responses(
        (status = 200, description = "OpenAPI document"),
    )
)]
pub async fn manifest_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read(state.manifest_path()).await {
        Ok(bytes) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(err) => {
            tracing::warn!(
                path = %state.manifest_path().display(),
                error = %err,
                "manifest unreadable, serving generated document"
            );
            Json(ApiDoc::openapi()).into_response()
        }
    }
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp and open listener count.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            listeners: state.broadcaster.listener_count(),
        }),
    )
}

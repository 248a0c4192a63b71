// Handlers: dashboard shell, version, status, server, change-mode

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ModeError;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / — static dashboard page; it polls the JSON endpoints itself.
pub(super) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/status — aggregated link health, cached for `cache.status_ttl_ms`.
pub(super) async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let agent = &state.agent;
    let view = state
        .cache
        .status
        .get_or_fetch(|| agent.fetch_status())
        .await;
    Json(view)
}

/// GET /api/server — current server location and public IP, cached for `cache.server_ttl_ms`.
pub(super) async fn server_handler(State(state): State<AppState>) -> impl IntoResponse {
    let agent = &state.agent;
    let info = state
        .cache
        .server
        .get_or_fetch(|| agent.fetch_server_info())
        .await;
    Json(info)
}

#[derive(Debug, Default, Deserialize)]
struct ChangeModeRequest {
    #[serde(default)]
    mode: String,
}

/// POST /api/change-mode — body `{"mode": "..."}`. Any unreadable body is a 400, not a framework rejection.
pub(super) async fn change_mode_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    let request: ChangeModeRequest = serde_json::from_slice(&body).unwrap_or_default();

    match state.agent.change_mode(&request.mode).await {
        Ok(mode) => {
            state.cache.status.invalidate().await;
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": format!("Mode changed to {}", mode),
                    "mode": mode,
                })),
            )
        }
        Err(e) => {
            let status = match e {
                ModeError::Invalid => StatusCode::BAD_REQUEST,
                ModeError::Command(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(json!({
                    "success": false,
                    "error": e.client_message(),
                })),
            )
        }
    }
}

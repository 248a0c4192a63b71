// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::agent::AgentCli;
use crate::cache::ResponseCache;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) agent: Arc<AgentCli>,
    pub(crate) cache: Arc<ResponseCache>,
}

pub fn app(agent: Arc<AgentCli>, cache: Arc<ResponseCache>) -> Router {
    let state = AppState { agent, cache };
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/status", get(http::status_handler)) // GET /api/status
        .route("/api/server", get(http::server_handler)) // GET /api/server
        .route("/api/change-mode", post(http::change_mode_handler)) // POST /api/change-mode
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

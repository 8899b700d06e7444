//! API routes for the query service

pub mod ask;
pub mod query;
pub mod synthesize;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use crate::types::response::InfoResponse;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info))
        .route("/query", post(query::query))
        .route("/search", post(query::search))
        .route("/ask", post(ask::ask))
        .route("/synthesize", post(synthesize::prepare))
        .route("/synthesize/full", post(synthesize::full))
}

/// GET / - health/info payload
async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Hello from corpus-rag".to_string(),
        search_endpoint: state
            .settings()
            .search
            .endpoint
            .clone()
            .unwrap_or_else(|| "not found".to_string()),
    })
}

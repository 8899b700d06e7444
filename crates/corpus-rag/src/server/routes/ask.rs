//! `/ask`: structured memos retrieval

use axum::{extract::State, Json};

use crate::error::{Error, RequestContext, Result};
use crate::server::state::AppState;
use crate::types::query::{AskRequest, SearchQuery};
use crate::types::response::{AskResponse, AskResult};

/// POST /ask - memos search with a fixed result shape
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    run_ask(&state, &request)
        .await
        .map_err(|e| Error::request(RequestContext::Search, e))
}

async fn run_ask(state: &AppState, request: &AskRequest) -> Result<Json<AskResponse>> {
    tracing::info!("Ask: \"{}\"", request.question);

    let corpus = state.registry().resolve("memos");
    let outcome = state.search().search(&SearchQuery::from(request)).await?;

    let results: Vec<AskResult> = outcome.records.iter().map(AskResult::from_record).collect();

    Ok(Json(AskResponse {
        query: request.question.clone(),
        year_filter: request.year_filter.clone(),
        top: request.top.unwrap_or(corpus.default_top),
        count: outcome.total.unwrap_or(results.len() as u64),
        results,
    }))
}

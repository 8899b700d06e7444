//! `/query` and `/search`: retrieval with and without LLM synthesis

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::{Error, RequestContext, Result};
use crate::server::state::AppState;
use crate::shaping::ShapedResult;
use crate::synthesis::build_llm_input;
use crate::types::query::{QueryRequest, SearchQuery};
use crate::types::response::SearchResponse;

/// POST /query - full pipeline: search, shape, build, synthesize
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<Value>> {
    run_query(&state, &request)
        .await
        .map_err(|e| Error::request(RequestContext::Query, e))
}

async fn run_query(state: &AppState, request: &QueryRequest) -> Result<Json<Value>> {
    tracing::info!(corpus = %request.corpus, "Query: \"{}\"", request.question);

    let corpus = state.registry().resolve(&request.corpus);
    let outcome = state.search().search(&SearchQuery::from(request)).await?;
    let shaped: Vec<ShapedResult> = outcome
        .records
        .iter()
        .map(|r| corpus.shaper.shape(r))
        .collect();

    let input = build_llm_input(&request.question, &shaped, &corpus);
    let synthesis = state.synthesizer().invoke(&input, &corpus).await?;

    tracing::info!(
        corpus = %corpus.name,
        documents = input.documents.len(),
        fallback = synthesis.is_fallback(),
        "query synthesis complete"
    );

    Ok(Json(synthesis.into_value()))
}

/// POST /search - retrieval and shaping only, bypassing the LLM
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<SearchResponse>> {
    run_search(&state, &request)
        .await
        .map_err(|e| Error::request(RequestContext::Search, e))
}

async fn run_search(state: &AppState, request: &QueryRequest) -> Result<Json<SearchResponse>> {
    tracing::info!(corpus = %request.corpus, "Search: \"{}\"", request.question);

    let corpus = state.registry().resolve(&request.corpus);
    let outcome = state.search().search(&SearchQuery::from(request)).await?;

    let results: Vec<ShapedResult> = outcome
        .records
        .iter()
        .map(|r| corpus.shaper.shape(r))
        .collect();

    Ok(Json(SearchResponse {
        query: request.question.clone(),
        corpus: corpus.name.clone(),
        count: outcome.total.unwrap_or(results.len() as u64),
        results,
    }))
}

//! `/synthesize` and `/synthesize/full`: LLM input assembly and invocation
//! over a previously returned `/ask` response

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::{Error, RequestContext, Result};
use crate::server::state::AppState;
use crate::synthesis::build_llm_input;
use crate::types::query::SynthesizeRequest;
use crate::types::synthesis::LlmInput;

/// POST /synthesize - build the LLM input without calling the LLM
pub async fn prepare(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<LlmInput>> {
    // The ask_response is memos-shaped, so the memos document rules apply
    let corpus = state.registry().resolve("memos");
    let input = build_llm_input(&request.question, &request.ask_response.results, &corpus);

    tracing::info!(documents = input.documents.len(), "synthesis input prepared");
    Ok(Json(input))
}

/// POST /synthesize/full - build the LLM input and run synthesis
pub async fn full(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<Value>> {
    run_full(&state, &request)
        .await
        .map_err(|e| Error::request(RequestContext::Synthesis, e))
}

async fn run_full(state: &AppState, request: &SynthesizeRequest) -> Result<Json<Value>> {
    let corpus = state.registry().resolve("memos");
    let input = build_llm_input(&request.question, &request.ask_response.results, &corpus);
    let synthesis = state.synthesizer().invoke(&input, &corpus).await?;

    tracing::info!(
        documents = input.documents.len(),
        fallback = synthesis.is_fallback(),
        "full synthesis complete"
    );

    Ok(Json(synthesis.into_value()))
}

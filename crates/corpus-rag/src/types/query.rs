//! Request types

use serde::{Deserialize, Serialize};

use crate::shaping::ShapedResult;

/// Request body for `/query` and `/search`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Corpus selector; unknown values fall back to the default corpus
    #[serde(default = "default_corpus")]
    pub corpus: String,

    /// Natural-language question; empty becomes a match-all search
    #[serde(default)]
    pub question: String,

    /// Optional filter expression, passed through to the backend verbatim
    #[serde(rename = "yearFilter", default)]
    pub year_filter: Option<String>,

    /// Result-count limit; defaults from the corpus config
    #[serde(default)]
    pub top: Option<usize>,

    /// Field projection; defaults from the corpus config
    #[serde(default)]
    pub select: Option<Vec<String>>,
}

fn default_corpus() -> String {
    "memos".to_string()
}

/// Structured request body for `/ask` (memos corpus)
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,

    #[serde(rename = "yearFilter", default)]
    pub year_filter: Option<String>,

    #[serde(default)]
    pub top: Option<usize>,

    #[serde(default)]
    pub select: Option<Vec<String>>,
}

/// Request body for `/synthesize` and `/synthesize/full`
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeRequest {
    pub question: String,
    pub ask_response: AskEnvelope,
}

/// The portion of an `/ask` response consumed by synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskEnvelope {
    #[serde(default)]
    pub results: Vec<ShapedResult>,
}

/// One per-request search, normalized from a handler request
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Case-normalized corpus name
    pub corpus: String,
    /// Free-text query
    pub text: String,
    /// Optional structured filter, opaque to this system
    pub filter: Option<String>,
    /// Caller limit override
    pub top: Option<usize>,
    /// Caller projection override
    pub select: Option<Vec<String>>,
}

impl From<&QueryRequest> for SearchQuery {
    fn from(request: &QueryRequest) -> Self {
        Self {
            corpus: request.corpus.clone(),
            text: request.question.clone(),
            filter: request.year_filter.clone(),
            top: request.top,
            select: request.select.clone(),
        }
    }
}

impl From<&AskRequest> for SearchQuery {
    fn from(request: &AskRequest) -> Self {
        Self {
            corpus: "memos".to_string(),
            text: request.question.clone(),
            filter: request.year_filter.clone(),
            top: request.top,
            select: request.select.clone(),
        }
    }
}

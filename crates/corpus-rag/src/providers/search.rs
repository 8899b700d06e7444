//! Search provider trait for querying the managed index

use async_trait::async_trait;

use crate::error::Result;
use crate::shaping::RawResult;

/// A single query against one backend index
#[derive(Debug, Clone)]
pub struct IndexQuery {
    /// Backend index identifier
    pub index: String,
    /// Full-text query (already wildcard-substituted)
    pub text: String,
    /// Optional structured filter expression, passed through verbatim
    pub filter: Option<String>,
    /// Comma-delimited field projection
    pub select: String,
    /// Result-count limit
    pub top: usize,
}

/// Result of one index query
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Total match count, when the backend reports one
    pub total: Option<u64>,
    /// Matched records in backend relevance order
    pub records: Vec<RawResult>,
}

/// Trait for querying a remote full-text/vector index
///
/// Implementations:
/// - `AzureSearchClient`: managed search index over HTTP
/// - test stubs returning canned records
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query; record order is the backend's relevance order
    async fn search(&self, query: IndexQuery) -> Result<SearchOutcome>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

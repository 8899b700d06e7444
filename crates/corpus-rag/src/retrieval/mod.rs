//! Search adapter: corpus-aware query construction against the managed index

use std::sync::Arc;

use crate::corpus::CorpusRegistry;
use crate::error::{Error, Result};
use crate::providers::{IndexQuery, SearchOutcome, SearchProvider};
use crate::types::query::SearchQuery;

/// Match-all token substituted for empty questions so an empty query still
/// returns ranked default results rather than nothing.
pub const WILDCARD: &str = "*";

/// Issues single queries against the search backend for a resolved corpus
pub struct SearchAdapter {
    registry: Arc<CorpusRegistry>,
    provider: Arc<dyn SearchProvider>,
}

impl SearchAdapter {
    pub fn new(registry: Arc<CorpusRegistry>, provider: Arc<dyn SearchProvider>) -> Self {
        Self { registry, provider }
    }

    /// Run one search; backend relevance order is preserved, never re-sorted.
    ///
    /// Backend errors propagate to the caller; there is no meaningful
    /// fallback for "no data".
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let corpus = self.registry.resolve(&query.corpus);
        let index = corpus.index.clone().ok_or_else(|| {
            Error::config(format!(
                "no search index configured for corpus '{}'",
                corpus.name
            ))
        })?;

        let top = query.top.unwrap_or(corpus.default_top);
        let select = query
            .select
            .clone()
            .unwrap_or_else(|| corpus.select_fields.clone())
            .join(",");

        tracing::debug!(
            corpus = %corpus.name,
            index = %index,
            top,
            "issuing index query via {}",
            self.provider.name()
        );

        let mut outcome = self
            .provider
            .search(IndexQuery {
                index,
                text: effective_search_text(&query.text).to_string(),
                filter: query.filter.clone(),
                select,
                top,
            })
            .await?;

        // The backend is asked for at most `top`; cap defensively anyway
        outcome.records.truncate(top);
        Ok(outcome)
    }
}

/// Substitute the match-all wildcard for empty or whitespace-only text
pub fn effective_search_text(text: &str) -> &str {
    if text.trim().is_empty() {
        WILDCARD
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn test_empty_text_becomes_wildcard() {
        assert_eq!(effective_search_text(""), "*");
        assert_eq!(effective_search_text("   "), "*");
        assert_eq!(effective_search_text("\t\n"), "*");
    }

    #[test]
    fn test_nonempty_text_passes_through() {
        assert_eq!(effective_search_text("firearms"), "firearms");
        assert_eq!(effective_search_text(" padded "), " padded ");
    }

    struct RecordingProvider {
        seen: Mutex<Vec<IndexQuery>>,
    }

    #[async_trait]
    impl SearchProvider for RecordingProvider {
        async fn search(&self, query: IndexQuery) -> crate::error::Result<SearchOutcome> {
            self.seen.lock().unwrap().push(query);
            Ok(SearchOutcome {
                total: Some(3),
                records: vec![
                    json!({"id": "a"}).as_object().cloned().unwrap(),
                    json!({"id": "b"}).as_object().cloned().unwrap(),
                    json!({"id": "c"}).as_object().cloned().unwrap(),
                ],
            })
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn adapter_with_recorder() -> (SearchAdapter, Arc<RecordingProvider>) {
        let mut settings = Settings::default();
        settings.search.index_memos = Some("memos-idx".to_string());
        settings.search.index_statutes = Some("ch32-idx".to_string());
        let registry = Arc::new(CorpusRegistry::from_settings(&settings));
        let provider = Arc::new(RecordingProvider {
            seen: Mutex::new(Vec::new()),
        });
        (
            SearchAdapter::new(registry, provider.clone()),
            provider,
        )
    }

    #[tokio::test]
    async fn test_defaults_come_from_corpus_config() {
        let (adapter, provider) = adapter_with_recorder();
        adapter
            .search(&SearchQuery {
                corpus: "statutes".to_string(),
                text: "  ".to_string(),
                filter: None,
                top: None,
                select: None,
            })
            .await
            .unwrap();

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen[0].index, "ch32-idx");
        assert_eq!(seen[0].text, "*");
        assert_eq!(seen[0].top, 15);
        assert_eq!(
            seen[0].select,
            "section_id,citation,title,citation_url,text_chunks"
        );
    }

    #[tokio::test]
    async fn test_caller_overrides_and_filter_passthrough() {
        let (adapter, provider) = adapter_with_recorder();
        let outcome = adapter
            .search(&SearchQuery {
                corpus: "memos".to_string(),
                text: "budget".to_string(),
                filter: Some("year eq 2021".to_string()),
                top: Some(2),
                select: Some(vec!["id".to_string(), "content".to_string()]),
            })
            .await
            .unwrap();

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen[0].filter.as_deref(), Some("year eq 2021"));
        assert_eq!(seen[0].select, "id,content");
        assert_eq!(seen[0].top, 2);
        // Provider returned 3 records; adapter caps at the requested limit
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.total, Some(3));
    }

    #[tokio::test]
    async fn test_unconfigured_index_is_config_error() {
        let registry = Arc::new(CorpusRegistry::from_settings(&Settings::default()));
        let provider = Arc::new(RecordingProvider {
            seen: Mutex::new(Vec::new()),
        });
        let adapter = SearchAdapter::new(registry, provider);

        let err = adapter
            .search(&SearchQuery {
                corpus: "memos".to_string(),
                text: "anything".to_string(),
                filter: None,
                top: None,
                select: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

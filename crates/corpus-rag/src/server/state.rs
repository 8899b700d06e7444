//! Application state for the query service
//!
//! All components are immutable after construction; requests share the state
//! through cheap `Arc` clones and never mutate it. Backend clients are
//! dependency-injected so tests can substitute stubs.

use std::sync::Arc;

use crate::config::Settings;
use crate::corpus::CorpusRegistry;
use crate::error::Result;
use crate::providers::{AzureOpenAiClient, AzureSearchClient, LlmProvider, SearchProvider};
use crate::retrieval::SearchAdapter;
use crate::synthesis::{PromptAssembler, Synthesizer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    settings: Settings,
    registry: Arc<CorpusRegistry>,
    search: SearchAdapter,
    synthesizer: Synthesizer,
}

impl AppState {
    /// Create state with the real HTTP backend clients
    pub fn new(settings: Settings) -> Result<Self> {
        let search_provider: Arc<dyn SearchProvider> =
            Arc::new(AzureSearchClient::new(&settings.search)?);
        let llm_provider: Arc<dyn LlmProvider> =
            Arc::new(AzureOpenAiClient::new(&settings.llm)?);
        Ok(Self::with_providers(settings, search_provider, llm_provider))
    }

    /// Create state with injected providers (used by tests)
    pub fn with_providers(
        settings: Settings,
        search_provider: Arc<dyn SearchProvider>,
        llm_provider: Arc<dyn LlmProvider>,
    ) -> Self {
        let registry = Arc::new(CorpusRegistry::from_settings(&settings));
        let search = SearchAdapter::new(Arc::clone(&registry), search_provider);
        let synthesizer = Synthesizer::new(
            llm_provider,
            PromptAssembler::new(settings.prompts.dir.clone()),
        );

        Self {
            inner: Arc::new(AppStateInner {
                settings,
                registry,
                search,
                synthesizer,
            }),
        }
    }

    /// Get configuration
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Get the corpus registry
    pub fn registry(&self) -> &CorpusRegistry {
        &self.inner.registry
    }

    /// Get the search adapter
    pub fn search(&self) -> &SearchAdapter {
        &self.inner.search
    }

    /// Get the synthesizer
    pub fn synthesizer(&self) -> &Synthesizer {
        &self.inner.synthesizer
    }
}

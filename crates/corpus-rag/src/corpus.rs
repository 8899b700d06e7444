//! Corpus registry: static per-corpus retrieval and shaping configuration

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::config::Settings;
use crate::shaping::{truncate_chars, MappedShaper, RawResult, ResultShaper, ShapedResult, PREVIEW_LIMIT};
use crate::synthesis::input::{DocumentShaper, MappedDocumentShaper};
use crate::types::synthesis::LlmDocument;

/// Corpus used when a request names no corpus or an unrecognized one
pub const DEFAULT_CORPUS: &str = "memos";

/// Retrieval and shaping configuration for one corpus
pub struct CorpusConfig {
    /// Corpus name (registry key)
    pub name: String,
    /// Backend index identifier, from the environment
    pub index: Option<String>,
    /// Prompt template file for this corpus
    pub prompt_file: String,
    /// Field projection requested from the index
    pub select_fields: Vec<String>,
    /// Default result limit
    pub default_top: usize,
    /// Strategy shaping raw records into UI-facing results
    pub shaper: Arc<dyn ResultShaper>,
    /// Strategy shaping results into LLM documents
    pub document_shaper: Arc<dyn DocumentShaper>,
}

/// Immutable corpus lookup, assembled once at startup
pub struct CorpusRegistry {
    corpora: HashMap<String, Arc<CorpusConfig>>,
    default: Arc<CorpusConfig>,
}

impl CorpusRegistry {
    /// Build the registry from environment-supplied settings
    pub fn from_settings(settings: &Settings) -> Self {
        let memos = Arc::new(CorpusConfig {
            name: "memos".to_string(),
            index: settings.search.index_memos.clone(),
            prompt_file: "prompt_memo.txt".to_string(),
            select_fields: vec![
                "id".to_string(),
                "year".to_string(),
                "metadata_storage_path".to_string(),
                "content".to_string(),
            ],
            default_top: 5,
            shaper: Arc::new(MappedShaper::new(
                &[("metadata_storage_path", "metadata_storage_path")],
                "content",
            )),
            document_shaper: Arc::new(MappedDocumentShaper::new(
                "metadata_storage_path",
                "content_preview",
            )),
        });

        let statutes = Arc::new(CorpusConfig {
            name: "statutes".to_string(),
            index: settings.search.index_statutes.clone(),
            prompt_file: "prompt_ch32.txt".to_string(),
            select_fields: vec![
                "section_id".to_string(),
                "citation".to_string(),
                "title".to_string(),
                "citation_url".to_string(),
                "text_chunks".to_string(),
            ],
            default_top: 15,
            shaper: Arc::new(MappedShaper::new(
                &[
                    ("section_id", "section_id"),
                    ("citation", "citation"),
                    ("title", "title"),
                    ("citation_url", "citation_url"),
                ],
                "text_chunks",
            )),
            document_shaper: Arc::new(MappedDocumentShaper::new(
                "section_id",
                "content_preview",
            )),
        });

        // Demonstration of fully custom shaping strategies
        let complex_demo = Arc::new(CorpusConfig {
            name: "complex_demo".to_string(),
            index: Some("placeholder-index".to_string()),
            prompt_file: "prompt_complex.txt".to_string(),
            select_fields: vec![
                "complex_id".to_string(),
                "page_number".to_string(),
                "paragraphs".to_string(),
            ],
            default_top: 5,
            shaper: Arc::new(ComplexShaper),
            document_shaper: Arc::new(ComplexDocumentShaper),
        });

        let mut corpora = HashMap::new();
        corpora.insert(memos.name.clone(), Arc::clone(&memos));
        corpora.insert(statutes.name.clone(), statutes);
        corpora.insert(complex_demo.name.clone(), complex_demo);

        Self {
            corpora,
            default: memos,
        }
    }

    /// Resolve a corpus name, case-insensitively
    ///
    /// Unknown names resolve to the default corpus rather than failing; the
    /// service never rejects a request purely over an unrecognized corpus.
    pub fn resolve(&self, name: &str) -> Arc<CorpusConfig> {
        let key = name.trim().to_lowercase();
        self.corpora
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    /// Registered corpus names
    pub fn names(&self) -> Vec<&str> {
        self.corpora.keys().map(String::as_str).collect()
    }
}

/// Custom result shaper for the complex demo corpus: space-joined paragraph
/// preview instead of the standard blank-line join.
struct ComplexShaper;

impl ResultShaper for ComplexShaper {
    fn shape(&self, raw: &RawResult) -> ShapedResult {
        let preview = match raw.get("paragraphs") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => String::new(),
        };

        let mut shaped = ShapedResult::new();
        shaped.insert(
            "complex_id".to_string(),
            raw.get("complex_id").cloned().unwrap_or(Value::Null),
        );
        shaped.insert(
            "page_number".to_string(),
            raw.get("page_number").cloned().unwrap_or(Value::Null),
        );
        shaped.insert(
            "content_preview".to_string(),
            Value::String(truncate_chars(&preview, PREVIEW_LIMIT)),
        );
        shaped
    }
}

/// Custom document shaper for the complex demo corpus
struct ComplexDocumentShaper;

impl DocumentShaper for ComplexDocumentShaper {
    fn document(&self, result: &ShapedResult) -> LlmDocument {
        let filename = result
            .get("complex_id")
            .and_then(Value::as_str)
            .map(|id| format!("{id}.txt"))
            .unwrap_or_else(|| "unknown".to_string());

        LlmDocument {
            filename,
            page: result
                .get("page_number")
                .and_then(Value::as_i64)
                .unwrap_or(1),
            content: result
                .get("content_preview")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            supersedes: false,
        }
    }
}

//! LLM input builder: shaped results into a bounded ordered document set

use serde_json::Value;

use crate::corpus::CorpusConfig;
use crate::shaping::ShapedResult;
use crate::types::synthesis::{Instructions, LlmDocument, LlmInput};

/// Strategy for deriving an `LlmDocument` from a shaped result
///
/// Chosen per corpus at config-resolution time, like result shaping.
pub trait DocumentShaper: Send + Sync {
    fn document(&self, result: &ShapedResult) -> LlmDocument;
}

/// Rule-based document shaper: named filename and content source fields
pub struct MappedDocumentShaper {
    filename_field: String,
    content_field: String,
}

impl MappedDocumentShaper {
    pub fn new(filename_field: &str, content_field: &str) -> Self {
        Self {
            filename_field: filename_field.to_string(),
            content_field: content_field.to_string(),
        }
    }
}

impl DocumentShaper for MappedDocumentShaper {
    fn document(&self, result: &ShapedResult) -> LlmDocument {
        LlmDocument {
            filename: document_filename(result.get(&self.filename_field)),
            page: 1,
            content: result
                .get(&self.content_field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            supersedes: false,
        }
    }
}

/// Build the LLM input from shaped results, preserving search ranking order
///
/// Order is semantically meaningful downstream: it is presented to the LLM as
/// the retrieval ranking and influences which citation it treats as primary.
pub fn build_llm_input(
    question: &str,
    results: &[ShapedResult],
    corpus: &CorpusConfig,
) -> LlmInput {
    let documents = results
        .iter()
        .map(|r| corpus.document_shaper.document(r))
        .collect();

    LlmInput {
        question: question.to_string(),
        documents,
        instructions: Instructions::default(),
    }
}

/// Derive a document filename from a stored field value
///
/// Convention: the final `/`-separated segment of the value, which is the
/// identity for non-path values. Absent or non-string values become the
/// literal placeholder "unknown".
pub fn document_filename(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.rsplit('/').next().unwrap_or(s).to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusRegistry;
    use crate::config::Settings;
    use serde_json::json;

    fn shaped(value: serde_json::Value) -> ShapedResult {
        value.as_object().cloned().unwrap()
    }

    fn memos_corpus() -> std::sync::Arc<CorpusConfig> {
        CorpusRegistry::from_settings(&Settings::default()).resolve("memos")
    }

    #[test]
    fn test_filename_takes_last_path_segment() {
        let value = json!("https://store.example.net/docs/2021/memo-17.pdf");
        assert_eq!(document_filename(Some(&value)), "memo-17.pdf");
    }

    #[test]
    fn test_filename_identity_for_plain_names() {
        let value = json!("32.001");
        assert_eq!(document_filename(Some(&value)), "32.001");
    }

    #[test]
    fn test_filename_unknown_when_absent() {
        assert_eq!(document_filename(None), "unknown");
        assert_eq!(document_filename(Some(&json!(7))), "unknown");
    }

    #[test]
    fn test_build_preserves_order_and_count() {
        let corpus = memos_corpus();
        let results: Vec<ShapedResult> = (0..7)
            .map(|i| {
                shaped(json!({
                    "metadata_storage_path": format!("docs/memo-{i}.pdf"),
                    "content_preview": format!("body {i}"),
                }))
            })
            .collect();

        let input = build_llm_input("what changed?", &results, &corpus);
        assert_eq!(input.documents.len(), 7);
        for (i, doc) in input.documents.iter().enumerate() {
            assert_eq!(doc.filename, format!("memo-{i}.pdf"));
            assert_eq!(doc.content, format!("body {i}"));
            assert_eq!(doc.page, 1);
            assert!(!doc.supersedes);
        }
    }

    #[test]
    fn test_build_carries_question_and_instructions() {
        let corpus = memos_corpus();
        let input = build_llm_input("  verbatim question ", &[], &corpus);
        assert_eq!(input.question, "  verbatim question ");
        assert!(input.instructions.honor_supersession);
        assert_eq!(input.instructions.output_format, "acheron_json");
    }
}

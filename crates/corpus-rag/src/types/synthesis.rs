//! LLM input types

use serde::{Deserialize, Serialize};

/// One retrieved document, ready for prompt assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmDocument {
    /// Source filename (final path segment of the stored path)
    pub filename: String,
    /// Page number; the primary corpora carry no pagination signal, so 1
    pub page: i64,
    /// Preview/content text for the document
    pub content: String,
    /// Whether this document is superseded by another
    ///
    /// Carried for the downstream LLM contract; no supersession detection
    /// exists, so this is always false.
    pub supersedes: bool,
}

/// Fixed policy flags read by the downstream LLM contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructions {
    pub honor_supersession: bool,
    pub output_format: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            honor_supersession: true,
            output_format: "acheron_json".to_string(),
        }
    }
}

/// Bounded, ordered document set plus the original question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmInput {
    /// The caller's question, verbatim
    pub question: String,
    /// Documents in search ranking order
    pub documents: Vec<LlmDocument>,
    /// Fixed policy flags
    pub instructions: Instructions,
}

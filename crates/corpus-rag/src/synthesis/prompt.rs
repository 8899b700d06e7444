//! Prompt assembly: template loading and document block serialization

use std::fs;
use std::path::PathBuf;

use crate::corpus::CorpusConfig;
use crate::error::{Error, Result};
use crate::types::synthesis::{LlmDocument, LlmInput};

/// Loads corpus templates and assembles the full synthesis prompt
pub struct PromptAssembler {
    dir: PathBuf,
}

impl PromptAssembler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the corpus's template text
    ///
    /// A missing or unreadable template is a configuration error for the
    /// request; a malformed prompt would produce meaningless LLM output.
    pub fn load_template(&self, corpus: &CorpusConfig) -> Result<String> {
        let path = self.dir.join(&corpus.prompt_file);
        fs::read_to_string(&path).map_err(|e| {
            Error::Template(format!("failed to read '{}': {}", path.display(), e))
        })
    }

    /// Serialize documents into one text block, blank-line separated, in order
    pub fn document_block(documents: &[LlmDocument]) -> String {
        documents
            .iter()
            .map(|d| format!("{} (p. {}):\n{}", d.filename, d.page, d.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Assemble the full prompt: template, question, then the document block
    pub fn assemble(template: &str, input: &LlmInput) -> String {
        format!(
            "{}\n\nUser question: {}\n\nRetrieved documents:\n{}",
            template,
            input.question,
            Self::document_block(&input.documents),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::synthesis::Instructions;

    fn doc(filename: &str, page: i64, content: &str) -> LlmDocument {
        LlmDocument {
            filename: filename.to_string(),
            page,
            content: content.to_string(),
            supersedes: false,
        }
    }

    #[test]
    fn test_document_block_format() {
        let block = PromptAssembler::document_block(&[
            doc("memo-1.pdf", 1, "first body"),
            doc("32.001", 1, "second body"),
        ]);
        assert_eq!(
            block,
            "memo-1.pdf (p. 1):\nfirst body\n\n32.001 (p. 1):\nsecond body"
        );
    }

    #[test]
    fn test_assemble_layout() {
        let input = LlmInput {
            question: "who approved it?".to_string(),
            documents: vec![doc("memo-1.pdf", 1, "approved by the board")],
            instructions: Instructions::default(),
        };
        let prompt = PromptAssembler::assemble("TEMPLATE TEXT", &input);
        assert_eq!(
            prompt,
            "TEMPLATE TEXT\n\nUser question: who approved it?\n\n\
             Retrieved documents:\nmemo-1.pdf (p. 1):\napproved by the board"
        );
    }

    #[test]
    fn test_missing_template_is_template_error() {
        let assembler = PromptAssembler::new("/nonexistent/prompt/dir");
        let registry = crate::corpus::CorpusRegistry::from_settings(
            &crate::config::Settings::default(),
        );
        let err = assembler.load_template(&registry.resolve("memos")).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
        assert!(err.to_string().contains("prompt_memo.txt"));
    }
}

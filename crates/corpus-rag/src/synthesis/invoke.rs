//! LLM invocation with deterministic fallback
//!
//! The invoker has exactly two outcomes: the model's parsed JSON, or a fixed
//! fallback envelope. Transport failures and non-JSON output both take the
//! fallback path; callers never see a raw error from this component.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::corpus::CorpusConfig;
use crate::error::{Error, Result};
use crate::providers::LlmProvider;
use crate::types::synthesis::LlmInput;

use super::prompt::PromptAssembler;

/// Outcome of one synthesis invocation
#[derive(Debug, Clone)]
pub enum SynthesisOutcome {
    /// The model returned parseable JSON, returned verbatim
    Success(Value),
    /// The model failed or returned non-JSON; fixed-shape envelope
    Fallback(Value),
}

impl SynthesisOutcome {
    pub fn into_value(self) -> Value {
        match self {
            SynthesisOutcome::Success(v) | SynthesisOutcome::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SynthesisOutcome::Fallback(_))
    }
}

/// Assembles the prompt and invokes the chat-completion backend
pub struct Synthesizer {
    llm: Arc<dyn LlmProvider>,
    prompts: PromptAssembler,
}

impl Synthesizer {
    pub fn new(llm: Arc<dyn LlmProvider>, prompts: PromptAssembler) -> Self {
        Self { llm, prompts }
    }

    /// Invoke the LLM for an assembled input
    ///
    /// Template loading failure is the one error that propagates; everything
    /// past that point resolves to Success or Fallback.
    pub async fn invoke(&self, input: &LlmInput, corpus: &CorpusConfig) -> Result<SynthesisOutcome> {
        let template = self.prompts.load_template(corpus)?;
        let prompt = PromptAssembler::assemble(&template, input);

        let outcome = match self.llm.complete(&prompt).await {
            Ok(content) => match parse_model_json(&content) {
                Ok(value) => SynthesisOutcome::Success(value),
                Err(e) => {
                    tracing::warn!("model output failed JSON parsing, using fallback");
                    SynthesisOutcome::Fallback(fallback_envelope(&e.message()))
                }
            },
            Err(e) => {
                tracing::warn!("LLM invocation failed, using fallback: {}", e);
                SynthesisOutcome::Fallback(fallback_envelope(&e.message()))
            }
        };

        Ok(outcome)
    }
}

/// Fixed-shape failure envelope embedding the failure reason
pub fn fallback_envelope(reason: &str) -> Value {
    json!({
        "intent": "interpretive",
        "summary": format!("[LLM processing failed: {reason}]"),
        "citations": [],
        "why_these": "System fallback: LLM did not return valid output.",
    })
}

/// Strip surrounding code fences and parse the remaining text strictly as JSON
///
/// The parse error identifies the raw content so failed completions are
/// diagnosable from logs.
pub fn parse_model_json(content: &str) -> Result<Value> {
    let stripped = strip_code_fences(content);
    serde_json::from_str(stripped)
        .map_err(|e| Error::llm(format!("model output is not valid JSON ({e}): {content}")))
}

/// Remove a surrounding triple-backtick fence, optionally tagged `json`
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_json() {
        let value = parse_model_json("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_bare_fence() {
        let value = parse_model_json("```\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_unfenced_json() {
        let value = parse_model_json("  {\"ok\": true} ").unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_parse_error_identifies_raw_content() {
        let err = parse_model_json("not json").unwrap_err();
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn test_fallback_envelope_shape() {
        let envelope = fallback_envelope("connection refused");
        assert_eq!(
            envelope,
            json!({
                "intent": "interpretive",
                "summary": "[LLM processing failed: connection refused]",
                "citations": [],
                "why_these": "System fallback: LLM did not return valid output.",
            })
        );
    }
}

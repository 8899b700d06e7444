//! Answer synthesis: LLM input assembly, prompting, and invocation

pub mod input;
pub mod invoke;
pub mod prompt;

pub use input::{build_llm_input, DocumentShaper, MappedDocumentShaper};
pub use invoke::{fallback_envelope, parse_model_json, SynthesisOutcome, Synthesizer};
pub use prompt::PromptAssembler;

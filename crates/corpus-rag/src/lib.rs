//! corpus-rag: retrieval-augmented query service
//!
//! Accepts a natural-language question plus a corpus selector, retrieves
//! candidate documents from a managed search index, reshapes the top results
//! into a bounded document set, and forwards them to an LLM for answer
//! synthesis with citation grounding. LLM failures resolve to a deterministic
//! fallback envelope instead of an error.

pub mod config;
pub mod corpus;
pub mod error;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod shaping;
pub mod synthesis;
pub mod types;

pub use config::Settings;
pub use corpus::{CorpusConfig, CorpusRegistry};
pub use error::{Error, Result};
pub use types::{
    query::{AskRequest, QueryRequest, SearchQuery, SynthesizeRequest},
    response::{AskResponse, SearchResponse},
    synthesis::{LlmDocument, LlmInput},
};

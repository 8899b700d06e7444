//! Shared request, response, and synthesis types

pub mod query;
pub mod response;
pub mod synthesis;

pub use query::{AskEnvelope, AskRequest, QueryRequest, SearchQuery, SynthesizeRequest};
pub use response::{AskResponse, AskResult, InfoResponse, SearchResponse};
pub use synthesis::{Instructions, LlmDocument, LlmInput};

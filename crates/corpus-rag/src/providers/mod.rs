//! Backend provider traits and HTTP client implementations

pub mod azure;
pub mod llm;
pub mod search;

pub use azure::{AzureOpenAiClient, AzureSearchClient};
pub use llm::LlmProvider;
pub use search::{IndexQuery, SearchOutcome, SearchProvider};

//! Error types for the query service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Query service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing environment value, bad address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search backend error
    #[error("Search backend error: {0}")]
    Search(String),

    /// LLM invocation error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt template error
    #[error("Prompt template error: {0}")]
    Template(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Request-level failure tagged with the operation that produced it
    #[error("{context} error: {message}")]
    Request {
        context: RequestContext,
        message: String,
    },
}

/// Operation that produced a request-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestContext {
    Query,
    Search,
    Synthesis,
    SynthesisPrep,
}

impl std::fmt::Display for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequestContext::Query => "Query",
            RequestContext::Search => "Search",
            RequestContext::Synthesis => "Synthesis",
            RequestContext::SynthesisPrep => "Synthesis prep",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a search backend error
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Wrap an error with the request context it surfaced from
    pub fn request(context: RequestContext, source: Error) -> Self {
        Self::Request {
            context,
            message: source.to_string(),
        }
    }

    /// The underlying message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Error::Config(m)
            | Error::Search(m)
            | Error::Llm(m)
            | Error::Template(m)
            | Error::Internal(m) => m.clone(),
            Error::Request { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let detail = match &self {
            Error::Request { context, message } => format!("{} error: {}", context, message),
            other => other.to_string(),
        };

        let body = Json(json!({ "detail": detail }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_display() {
        assert_eq!(RequestContext::Query.to_string(), "Query");
        assert_eq!(RequestContext::SynthesisPrep.to_string(), "Synthesis prep");
    }

    #[test]
    fn test_request_wrapping_preserves_message() {
        let err = Error::request(
            RequestContext::Search,
            Error::search("index unreachable"),
        );
        assert_eq!(
            err.to_string(),
            "Search error: Search backend error: index unreachable"
        );
    }
}

//! HTTP clients for the managed search index and the chat-completion backend
//!
//! Both clients are constructed lazily: credentials are checked when a request
//! is actually issued, so a partially configured process still serves the
//! endpoints that do not need the missing backend.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::{LlmConfig, SearchConfig};
use crate::error::{Error, Result};

use super::llm::LlmProvider;
use super::search::{IndexQuery, SearchOutcome, SearchProvider};

/// Client for the managed search index
pub struct AzureSearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl AzureSearchClient {
    /// Create a new search client with the configured timeout
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::config("SEARCH_ENDPOINT is not set"))?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("SEARCH_API_KEY is not set"))?;
        Ok((endpoint, api_key))
    }
}

#[derive(serde::Serialize)]
struct SearchRequestBody<'a> {
    search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    select: &'a str,
    top: usize,
    count: bool,
}

#[derive(serde::Deserialize)]
struct SearchResponseBody {
    #[serde(rename = "@odata.count")]
    count: Option<u64>,
    #[serde(default)]
    value: Vec<crate::shaping::RawResult>,
}

#[async_trait]
impl SearchProvider for AzureSearchClient {
    async fn search(&self, query: IndexQuery) -> Result<SearchOutcome> {
        let (endpoint, api_key) = self.credentials()?;
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            endpoint.trim_end_matches('/'),
            query.index,
            self.config.api_version,
        );

        let body = SearchRequestBody {
            search: &query.text,
            filter: query.filter.as_deref(),
            select: &query.select,
            top: query.top,
            count: true,
        };

        let response = self
            .http
            .post(&url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::search(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::search(format!(
                "index '{}' returned {}: {}",
                query.index, status, detail
            )));
        }

        let payload: SearchResponseBody = response
            .json()
            .await
            .map_err(|e| Error::search(format!("malformed response: {e}")))?;

        Ok(SearchOutcome {
            total: payload.count,
            records: payload.value,
        })
    }

    fn name(&self) -> &str {
        "azure-search"
    }
}

/// Client for the deployment-addressed chat-completion backend
pub struct AzureOpenAiClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl AzureOpenAiClient {
    /// Create a new chat-completion client with the configured timeout
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    fn endpoint_url(&self) -> Result<(String, &str)> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::config("LLM_ENDPOINT is not set"))?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("LLM_API_KEY is not set"))?;
        let api_version = self
            .config
            .api_version
            .as_deref()
            .ok_or_else(|| Error::config("LLM_API_VERSION is not set"))?;
        let deployment = self
            .config
            .deployment
            .as_deref()
            .ok_or_else(|| Error::config("LLM_DEPLOYMENT is not set"))?;

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            api_version,
        );
        Ok((url, api_key))
    }
}

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl LlmProvider for AzureOpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let (url, api_key) = self.endpoint_url()?;

        let request = ChatRequest {
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(&url)
            .header("api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "completion failed ({}): {}",
                status, detail
            )));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("malformed completion response: {e}")))?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::llm("completion response contained no choices"))
    }

    fn name(&self) -> &str {
        "azure-openai"
    }
}

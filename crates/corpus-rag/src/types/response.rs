//! Response types

use serde::Serialize;
use serde_json::Value;

use crate::shaping::{content_preview, RawResult, ShapedResult};

/// Response body for `/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The question as submitted
    pub query: String,
    /// Resolved corpus name
    pub corpus: String,
    /// Total match count (backend hint, else returned record count)
    pub count: u64,
    /// Shaped results in relevance order
    pub results: Vec<ShapedResult>,
}

/// Response body for `/ask`
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub query: String,
    #[serde(rename = "yearFilter")]
    pub year_filter: Option<String>,
    pub top: usize,
    pub count: u64,
    pub results: Vec<AskResult>,
}

/// One memos-shaped result for `/ask`
#[derive(Debug, Clone, Serialize)]
pub struct AskResult {
    pub id: Value,
    pub score: Option<f64>,
    pub year: Value,
    pub metadata_storage_path: Value,
    pub content_preview: String,
}

impl AskResult {
    /// Shape one raw record; absent fields degrade to null, never an error
    pub fn from_record(raw: &RawResult) -> Self {
        Self {
            id: raw.get("id").cloned().unwrap_or(Value::Null),
            score: raw.get("@search.score").and_then(Value::as_f64),
            year: raw.get("year").cloned().unwrap_or(Value::Null),
            metadata_storage_path: raw
                .get("metadata_storage_path")
                .cloned()
                .unwrap_or(Value::Null),
            content_preview: content_preview(raw.get("content")),
        }
    }
}

/// Response body for `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub message: String,
    pub search_endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ask_result_from_full_record() {
        let raw = json!({
            "id": "m-42",
            "@search.score": 3.25,
            "year": 2021,
            "metadata_storage_path": "https://store/docs/memo-42.pdf",
            "content": "memo body",
        })
        .as_object()
        .cloned()
        .unwrap();

        let result = AskResult::from_record(&raw);
        assert_eq!(result.id, json!("m-42"));
        assert_eq!(result.score, Some(3.25));
        assert_eq!(result.year, json!(2021));
        assert_eq!(result.content_preview, "memo body");
    }

    #[test]
    fn test_ask_result_degrades_missing_fields() {
        let raw = json!({ "content": "only content" }).as_object().cloned().unwrap();
        let result = AskResult::from_record(&raw);
        assert_eq!(result.id, Value::Null);
        assert_eq!(result.score, None);
        assert_eq!(result.year, Value::Null);
        assert_eq!(result.metadata_storage_path, Value::Null);
        assert_eq!(result.content_preview, "only content");
    }
}

//! Result shaping: raw index records into corpus-specific UI-facing results

use serde_json::{Map, Value};

/// Raw field-value record as returned by the search backend
pub type RawResult = Map<String, Value>;

/// Corpus-specific shaped result
pub type ShapedResult = Map<String, Value>;

/// Maximum content preview length in Unicode code points
pub const PREVIEW_LIMIT: usize = 500;

/// Strategy for shaping a raw record into a corpus-specific result
///
/// Selected once at config-resolution time and stored on the corpus config,
/// so per-record shaping never branches on the corpus name.
pub trait ResultShaper: Send + Sync {
    fn shape(&self, raw: &RawResult) -> ShapedResult;
}

/// Rule-based shaper: copies declared source fields and derives a bounded
/// `content_preview` from a designated source field.
pub struct MappedShaper {
    /// (output field, source field) pairs, in output order
    fields: Vec<(String, String)>,
    /// Source field feeding `content_preview`
    preview_from: String,
}

impl MappedShaper {
    pub fn new(fields: &[(&str, &str)], preview_from: &str) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(out, src)| (out.to_string(), src.to_string()))
                .collect(),
            preview_from: preview_from.to_string(),
        }
    }
}

impl ResultShaper for MappedShaper {
    fn shape(&self, raw: &RawResult) -> ShapedResult {
        let mut shaped = ShapedResult::new();
        for (out, src) in &self.fields {
            // Absent source fields degrade to null, never an error
            let value = raw.get(src).cloned().unwrap_or(Value::Null);
            shaped.insert(out.clone(), value);
        }
        shaped.insert(
            "content_preview".to_string(),
            Value::String(content_preview(raw.get(&self.preview_from))),
        );
        shaped
    }
}

/// Derive the bounded content preview from a projected field value
///
/// A list of strings is joined with a blank line before truncation; a plain
/// string is truncated directly; anything else yields an empty string.
pub fn content_preview(value: Option<&Value>) -> String {
    let text = match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => String::new(),
    };
    truncate_chars(&text, PREVIEW_LIMIT)
}

/// Prefix cut at `limit` code points; no ellipsis, no word-boundary adjustment
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

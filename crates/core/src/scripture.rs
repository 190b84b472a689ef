//! Scripture search result types.
//!
//! The search feature constrains the provider to a structured response:
//! a JSON array of passage records. Items have no identity beyond
//! structural equality; identical references may repeat across pages.

use serde::{Deserialize, Serialize};

/// One passage returned by the scripture search feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureResultItem {
    /// Exact source of the passage (e.g. "요한복음 3:16").
    pub reference: String,

    /// Full passage text.
    pub verse: String,

    /// Short summary or modern application of the passage.
    pub summary: String,
}

/// The response schema the provider is instructed to follow for search.
pub fn search_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "reference": {
                    "type": "string",
                    "description": "성경 구절의 정확한 출처 (예: '요한복음 3:16')."
                },
                "verse": {
                    "type": "string",
                    "description": "성경 구절의 전체 텍스트."
                },
                "summary": {
                    "type": "string",
                    "description": "성경 구절의 의미에 대한 간략한 요약 또는 현대적 적용점."
                }
            },
            "required": ["reference", "verse", "summary"]
        }
    })
}

/// Parse a serialized result batch.
pub fn parse_results(payload: &str) -> std::result::Result<Vec<ScriptureResultItem>, serde_json::Error> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_fields() {
        let schema = search_response_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
    }

    #[test]
    fn parse_valid_batch() {
        let payload = r#"[{"reference":"요한복음 3:16","verse":"하나님이 세상을 이처럼 사랑하사...","summary":"하나님의 사랑"}]"#;
        let items = parse_results(payload).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].reference, "요한복음 3:16");
    }

    #[test]
    fn parse_empty_payload_is_empty_batch() {
        assert!(parse_results("").unwrap().is_empty());
        assert!(parse_results("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_malformed_payload_errors() {
        assert!(parse_results("not json at all").is_err());
    }
}

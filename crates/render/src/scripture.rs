//! Scripture search result rendering and copy formatting.

use tracing::debug;

use shepherd_core::scripture::{ScriptureResultItem, parse_results};

use crate::markup::{Block, Inline, render_markup};

/// Notice shown when a search page parses but holds nothing to display.
pub const NO_RESULTS_NOTICE: &str = "검색 결과가 없거나 형식이 올바르지 않습니다.";

const SUMMARY_LABEL: &str = "요약 및 적용:";

/// Render a scripture search payload.
///
/// A valid non-empty result array bypasses the generic scanner: each item
/// becomes a quote block plus a labeled summary line. An empty array turns
/// into the no-results notice; anything unparseable falls back to generic
/// markup rendering of the raw text (e.g. an error message).
pub fn render_scripture(payload: &str) -> Vec<Block> {
    match parse_results(payload) {
        Ok(items) if !items.is_empty() => items.iter().flat_map(item_blocks).collect(),
        Ok(_) => render_markup(NO_RESULTS_NOTICE),
        Err(e) => {
            debug!(error = %e, "Search payload is not a result array, rendering as markup");
            render_markup(payload)
        }
    }
}

fn item_blocks(item: &ScriptureResultItem) -> Vec<Block> {
    vec![
        Block::Quote {
            verse: item.verse.clone(),
            reference: item.reference.clone(),
        },
        Block::Paragraph {
            lines: vec![vec![
                Inline::Bold(SUMMARY_LABEL.into()),
                Inline::Text(format!(" {}", item.summary)),
            ]],
        },
    ]
}

/// Reformat content for copy/export.
///
/// Scripture payloads become a fixed three-line block per item; anything
/// that fails to parse (or any other feature's content) passes through
/// verbatim.
pub fn format_for_copy(payload: &str) -> String {
    let Ok(items) = parse_results(payload) else {
        return payload.to_string();
    };
    if items.is_empty() {
        return payload.to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "[{}]\n\"{}\"\n\n{SUMMARY_LABEL} {}\n\n---\n",
                item.reference, item.verse, item.summary
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = r#"[
        {"reference":"요한복음 3:16","verse":"하나님이 세상을 이처럼 사랑하사","summary":"하나님의 사랑"},
        {"reference":"로마서 8:28","verse":"모든 것이 합력하여 선을 이루느니라","summary":"섭리에 대한 신뢰"}
    ]"#;

    #[test]
    fn valid_batch_renders_quote_and_summary_per_item() {
        let blocks = render_scripture(BATCH);
        assert_eq!(blocks.len(), 4);
        assert!(matches!(
            &blocks[0],
            Block::Quote { reference, .. } if reference == "요한복음 3:16"
        ));
        match &blocks[1] {
            Block::Paragraph { lines } => {
                assert_eq!(lines[0][0], Inline::Bold(SUMMARY_LABEL.into()));
            }
            other => panic!("expected summary paragraph, got {other:?}"),
        }
        assert!(matches!(
            &blocks[2],
            Block::Quote { reference, .. } if reference == "로마서 8:28"
        ));
    }

    #[test]
    fn empty_batch_renders_notice() {
        let blocks = render_scripture("[]");
        match &blocks[0] {
            Block::Paragraph { lines } => {
                assert_eq!(lines[0][0], Inline::Text(NO_RESULTS_NOTICE.into()));
            }
            other => panic!("expected notice paragraph, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_payload_falls_back_to_markup() {
        let blocks = render_scripture("## 오류 안내\n요청이 실패했습니다");
        assert!(matches!(&blocks[0], Block::Heading { level: 2, .. }));
    }

    #[test]
    fn copy_format_is_three_line_blocks() {
        let text = format_for_copy(BATCH);
        assert!(text.starts_with("[요한복음 3:16]\n\"하나님이 세상을 이처럼 사랑하사\"\n\n요약 및 적용: 하나님의 사랑\n\n---\n"));
        assert!(text.contains("[로마서 8:28]"));
        assert_eq!(text.matches("---").count(), 2);
    }

    #[test]
    fn copy_format_passes_non_json_through() {
        let raw = "## 기도문\n주님...";
        assert_eq!(format_for_copy(raw), raw);
    }
}

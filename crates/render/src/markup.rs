//! Single-pass markup scanner.
//!
//! Converts the markup subset the prompts request (`#`/`##`/`###`
//! headings, `**bold**` spans, `-`/`*` bullet lines) into display blocks.
//! Rendering is one-way: text in, blocks out, never round-tripped.

use serde::{Deserialize, Serialize};

/// An inline span inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Bold(String),
}

/// One display block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Heading, levels 1–3.
    Heading { level: u8, spans: Vec<Inline> },

    /// Paragraph; each entry is one source line (line breaks are kept
    /// within the block).
    Paragraph { lines: Vec<Vec<Inline>> },

    /// Unordered list built from one contiguous run of bullet lines.
    List { items: Vec<Vec<Inline>> },

    /// A quoted passage with its source, used by the scripture view.
    Quote { verse: String, reference: String },
}

/// Scan `text` into a block sequence.
///
/// Empty input yields an empty sequence. A non-bullet line closes any open
/// list; a blank line closes any open paragraph.
pub fn render_markup(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();
    let mut paragraph_lines: Vec<Vec<Inline>> = Vec::new();

    for line in text.lines() {
        if let Some(item) = bullet_text(line) {
            flush_paragraph(&mut blocks, &mut paragraph_lines);
            list_items.push(parse_inlines(item));
            continue;
        }
        flush_list(&mut blocks, &mut list_items);

        if let Some((level, rest)) = heading_text(line) {
            flush_paragraph(&mut blocks, &mut paragraph_lines);
            blocks.push(Block::Heading {
                level,
                spans: parse_inlines(rest),
            });
        } else if line.trim().is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph_lines);
        } else {
            paragraph_lines.push(parse_inlines(line));
        }
    }

    flush_list(&mut blocks, &mut list_items);
    flush_paragraph(&mut blocks, &mut paragraph_lines);
    blocks
}

fn flush_list(blocks: &mut Vec<Block>, items: &mut Vec<Vec<Inline>>) {
    if !items.is_empty() {
        blocks.push(Block::List {
            items: std::mem::take(items),
        });
    }
}

fn flush_paragraph(blocks: &mut Vec<Block>, lines: &mut Vec<Vec<Inline>>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph {
            lines: std::mem::take(lines),
        });
    }
}

/// `# ` / `## ` / `### ` prefixes, deepest first so `###` is not read as `#`.
fn heading_text(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim_start();
    for (level, prefix) in [(3u8, "### "), (2, "## "), (1, "# ")] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return Some((level, rest));
        }
    }
    None
}

/// Bullet lines start with `- ` or `* `, optionally indented.
fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// Split a line into text and bold spans.
///
/// An unmatched `**` has no closing partner and is kept as literal text,
/// so a dangling marker never leaks an open bold span into the output.
pub fn parse_inlines(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            // Odd marker count: everything left is literal.
            break;
        };

        if open > 0 {
            spans.push(Inline::Text(rest[..open].to_string()));
        }
        spans.push(Inline::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Vec<Inline> {
        vec![Inline::Text(text.into())]
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(render_markup("").is_empty());
    }

    #[test]
    fn heading_list_paragraph_order() {
        let blocks = render_markup("## Title\n- a\n- b\nplain");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    spans: plain("Title"),
                },
                Block::List {
                    items: vec![plain("a"), plain("b")],
                },
                Block::Paragraph {
                    lines: vec![plain("plain")],
                },
            ]
        );
    }

    #[test]
    fn heading_levels() {
        let blocks = render_markup("# one\n## two\n### three");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                _ => panic!("expected heading"),
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn bold_spans_inside_paragraph() {
        let blocks = render_markup("먼저 **핵심** 내용");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                lines: vec![vec![
                    Inline::Text("먼저 ".into()),
                    Inline::Bold("핵심".into()),
                    Inline::Text(" 내용".into()),
                ]],
            }]
        );
    }

    #[test]
    fn unmatched_bold_is_literal_text() {
        let blocks = render_markup("a **b");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                lines: vec![plain("a **b")],
            }]
        );
    }

    #[test]
    fn trailing_odd_marker_after_closed_span() {
        let spans = parse_inlines("**bold** then **open");
        assert_eq!(
            spans,
            vec![
                Inline::Bold("bold".into()),
                Inline::Text(" then **open".into()),
            ]
        );
    }

    #[test]
    fn star_bullets_group_with_dash_bullets() {
        let blocks = render_markup("- a\n* b\n- c");
        assert_eq!(
            blocks,
            vec![Block::List {
                items: vec![plain("a"), plain("b"), plain("c")],
            }]
        );
    }

    #[test]
    fn non_bullet_line_closes_list_group() {
        let blocks = render_markup("- a\nmiddle\n- b");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::List { items } if items.len() == 1));
        assert!(matches!(&blocks[1], Block::Paragraph { .. }));
        assert!(matches!(&blocks[2], Block::List { items } if items.len() == 1));
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        let blocks = render_markup("first line\nsecond line\n\nnew paragraph");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Paragraph { lines } if lines.len() == 2));
        assert!(matches!(&blocks[1], Block::Paragraph { lines } if lines.len() == 1));
    }

    #[test]
    fn indented_bullets_are_recognized() {
        let blocks = render_markup("  - indented");
        assert!(matches!(&blocks[0], Block::List { items } if items.len() == 1));
    }

    #[test]
    fn bold_inside_heading_and_list() {
        let blocks = render_markup("## **강조** 제목\n- **굵은** 항목");
        match &blocks[0] {
            Block::Heading { spans, .. } => assert_eq!(spans[0], Inline::Bold("강조".into())),
            other => panic!("expected heading, got {other:?}"),
        }
        match &blocks[1] {
            Block::List { items } => assert_eq!(items[0][0], Inline::Bold("굵은".into())),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# 제목\n\n- 하나\n- 둘\n\n본문 **강조** 포함";
        assert_eq!(render_markup(input), render_markup(input));
    }
}

//! Plain-text serialization of display blocks.
//!
//! Used by the terminal view and the plain-text exporter. Bold spans keep
//! their markers so emphasis survives in plain text; structure (headings,
//! bullets, quotes) is re-expressed with simple prefixes.

use crate::markup::{Block, Inline};

/// Serialize blocks to displayable plain text.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut out = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Heading { level, spans } => {
                for _ in 0..*level {
                    out.push('#');
                }
                out.push(' ');
                out.push_str(&spans_to_text(spans));
                out.push('\n');
            }
            Block::Paragraph { lines } => {
                for line in lines {
                    out.push_str(&spans_to_text(line));
                    out.push('\n');
                }
            }
            Block::List { items } => {
                for item in items {
                    out.push_str("  - ");
                    out.push_str(&spans_to_text(item));
                    out.push('\n');
                }
            }
            Block::Quote { verse, reference } => {
                out.push_str(&format!("  \"{verse}\"\n  — {reference}\n"));
            }
        }
    }

    out
}

fn spans_to_text(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(t) => t.clone(),
            Inline::Bold(t) => format!("**{t}**"),
        })
        .collect()
}

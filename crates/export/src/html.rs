//! HTML transcript export.
//!
//! A standalone document with the transcript title, per-message role
//! labels, and the same heading/bold/list structure the terminal view
//! renders. Model messages go through envelope extraction first, so no
//! control markers reach the document.

use shepherd_core::chat::{ChatMessage, Role};
use shepherd_render::markup::{Block, Inline};
use shepherd_render::render_markup;
use shepherd_session::chat::ChatSession;

const DOCUMENT_TITLE: &str = "목회 AI 컨설턴트 대화 기록";

/// Escape text for HTML element content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn spans_to_html(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(t) => escape(t),
            Inline::Bold(t) => format!("<strong>{}</strong>", escape(t)),
        })
        .collect()
}

/// Serialize rendered blocks to HTML.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                out.push_str(&format!("<h{level}>{}</h{level}>\n", spans_to_html(spans)));
            }
            Block::Paragraph { lines } => {
                let body = lines
                    .iter()
                    .map(|line| spans_to_html(line))
                    .collect::<Vec<_>>()
                    .join("<br/>");
                out.push_str(&format!("<p>{body}</p>\n"));
            }
            Block::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    out.push_str(&format!("<li>{}</li>\n", spans_to_html(item)));
                }
                out.push_str("</ul>\n");
            }
            Block::Quote { verse, reference } => {
                out.push_str(&format!(
                    "<blockquote><p>\"{}\"</p><footer>{}</footer></blockquote>\n",
                    escape(verse),
                    escape(reference)
                ));
            }
        }
    }
    out
}

/// Build the full transcript document.
pub fn transcript_html(messages: &[ChatMessage]) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{DOCUMENT_TITLE}</h1>\n"));

    for message in messages {
        let (label, class) = match message.role {
            Role::User => ("사용자", "user"),
            Role::Model => ("AI 컨설턴트", "model"),
        };
        body.push_str(&format!(
            "<section class=\"{class}\">\n<h2>{label}</h2>\n"
        ));
        body.push_str(&blocks_to_html(&render_markup(&ChatSession::display_text(
            message,
        ))));
        body.push_str("</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\"/>\n<title>{DOCUMENT_TITLE}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

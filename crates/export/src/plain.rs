//! Plain-text export.

use chrono::{Local, NaiveDate};

use shepherd_core::chat::{ChatMessage, Role};
use shepherd_render::format_for_copy;
use shepherd_session::chat::ChatSession;

/// Fixed filename for plain-text chat transcript export.
pub const TRANSCRIPT_FILENAME: &str = "목회_AI_컨설턴트_대화기록.txt";

const USER_LABEL: &str = "사용자:";
const MODEL_LABEL: &str = "AI 컨설턴트:";

/// Date-stamped filename for one feature result.
pub fn result_filename(feature_name: &str, date: NaiveDate) -> String {
    format!("{feature_name}_{}.txt", date.format("%Y-%m-%d"))
}

/// Today's filename for one feature result.
pub fn result_filename_today(feature_name: &str) -> String {
    result_filename(feature_name, Local::now().date_naive())
}

/// The exported text for one feature result.
///
/// Scripture search payloads are reformatted into the fixed per-item copy
/// blocks; everything else is exported verbatim.
pub fn result_text(feature_name: &str, content: &str) -> String {
    if feature_name == "scripture_search" {
        format_for_copy(content)
    } else {
        content.to_string()
    }
}

/// The chat transcript as labeled plain text.
pub fn transcript_text(messages: &[ChatMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let label = match message.role {
            Role::User => USER_LABEL,
            Role::Model => MODEL_LABEL,
        };
        out.push_str(label);
        out.push('\n');
        out.push_str(&ChatSession::display_text(message));
        out.push_str("\n\n");
    }
    out
}

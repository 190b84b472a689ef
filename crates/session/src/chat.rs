//! Chat turn state machine and response envelope extraction.
//!
//! One turn runs `Idle → AwaitingResponse → Streaming* → Idle`. Submission
//! while a turn is outstanding is a no-op; chunks apply in arrival order;
//! a transport failure completes the turn with a fixed user-visible
//! message instead of abandoning it.

use tracing::debug;

use shepherd_core::chat::{ChatMessage, Role};

/// Fixed message shown as the model's reply when a turn fails mid-stream.
pub const TURN_FAILURE_TEXT: &str = "죄송합니다. 답변을 생성하는 중에 오류가 발생했습니다.";

const FINAL_OPEN: &str = "<final_response>";
const FINAL_CLOSE: &str = "</final_response>";
const THINKING_OPEN: &str = "<thinking_process>";
const THINKING_CLOSE: &str = "</thinking_process>";
const FOLLOW_UP_OPEN: &str = "<follow_up>";
const FOLLOW_UP_CLOSE: &str = "</follow_up>";

/// Where the session is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No turn outstanding; input is accepted.
    Idle,
    /// The request has been submitted, no delta received yet.
    AwaitingResponse,
    /// Deltas are arriving.
    Streaming,
}

/// Ordered message history plus per-turn bookkeeping for the chat view.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    suggestions: Vec<String>,
    phase: TurnPhase,
    last_turn_failed: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            suggestions: Vec::new(),
            phase: TurnPhase::Idle,
            last_turn_failed: false,
        }
    }

    /// Full history, oldest first. Model entries hold the raw envelope.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Follow-up suggestions from the most recent completed turn.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether a turn is outstanding (input must be rejected).
    pub fn is_busy(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    pub fn last_turn_failed(&self) -> bool {
        self.last_turn_failed
    }

    /// Start a turn. Returns false (and changes nothing) if a turn is
    /// already outstanding or the input is blank.
    pub fn begin_turn(&mut self, text: &str) -> bool {
        if self.is_busy() {
            debug!("Submission ignored: a turn is already outstanding");
            return false;
        }
        if text.trim().is_empty() {
            return false;
        }

        self.suggestions.clear();
        self.last_turn_failed = false;
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::model(""));
        self.phase = TurnPhase::AwaitingResponse;
        true
    }

    /// The history to send to the provider: everything up to, but not
    /// including, the model entry being filled this turn.
    pub fn request_messages(&self) -> Vec<ChatMessage> {
        match self.phase {
            TurnPhase::Idle => self.messages.clone(),
            _ => self.messages[..self.messages.len() - 1].to_vec(),
        }
    }

    /// Append one delta to the model entry being filled. Deltas apply in
    /// arrival order; a delta outside a turn is dropped.
    pub fn apply_chunk(&mut self, delta: &str) {
        if !self.is_busy() {
            debug!("Dropping delta received outside a turn");
            return;
        }
        if let Some(last) = self.messages.last_mut() {
            last.text.push_str(delta);
        }
        self.phase = TurnPhase::Streaming;
    }

    /// Finish the turn: extract follow-up suggestions from the accumulated
    /// envelope and return the display text of the final answer.
    pub fn complete_turn(&mut self) -> String {
        let raw = self
            .messages
            .last()
            .filter(|m| m.role == Role::Model)
            .map(|m| m.text.clone())
            .unwrap_or_default();

        self.suggestions = follow_up_suggestions(&raw);
        self.last_turn_failed = false;
        self.phase = TurnPhase::Idle;
        final_answer(&raw)
    }

    /// Complete the turn as failed: the model entry becomes the fixed
    /// error text and the turn error flag is set. The session never
    /// reverts to Idle without completing the turn.
    pub fn fail_turn(&mut self) {
        if !self.is_busy() {
            return;
        }
        if let Some(last) = self.messages.last_mut() {
            last.text = TURN_FAILURE_TEXT.into();
        }
        self.suggestions.clear();
        self.last_turn_failed = true;
        self.phase = TurnPhase::Idle;
    }

    /// Display text for one message (model entries go through envelope
    /// extraction, user entries are shown verbatim).
    pub fn display_text(message: &ChatMessage) -> String {
        match message.role {
            Role::User => message.text.clone(),
            Role::Model => final_answer(&message.text),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the final-answer region from a response envelope.
///
/// When the `<final_response>` region is present it is returned trimmed.
/// Otherwise the full text is used with the other regions' spans stripped
/// and any stray envelope tags removed, so control markers never reach
/// the user.
pub fn final_answer(text: &str) -> String {
    if let Some(inner) = bounded_span(text, FINAL_OPEN, FINAL_CLOSE) {
        return inner.trim().to_string();
    }

    let mut out = strip_bounded(text, THINKING_OPEN, THINKING_CLOSE);
    out = strip_bounded(&out, FOLLOW_UP_OPEN, FOLLOW_UP_CLOSE);
    for tag in [
        FINAL_OPEN,
        FINAL_CLOSE,
        THINKING_OPEN,
        THINKING_CLOSE,
        FOLLOW_UP_OPEN,
        FOLLOW_UP_CLOSE,
    ] {
        out = out.replace(tag, "");
    }
    out.trim().to_string()
}

/// Extract the follow-up suggestions: non-blank lines inside the
/// `<follow_up>` region, in order. Absent region means no suggestions.
pub fn follow_up_suggestions(text: &str) -> Vec<String> {
    let Some(inner) = bounded_span(text, FOLLOW_UP_OPEN, FOLLOW_UP_CLOSE) else {
        return Vec::new();
    };

    inner
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// The text between `open` and the next `close` after it, if both exist.
fn bounded_span<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find(close)? + start;
    Some(&text[start..end])
}

/// Remove every `open…close` span from the text.
fn strip_bounded(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let Some(end) = rest[start + open.len()..].find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + open.len() + end + close.len()..];
    }
    out.push_str(rest);
    out
}

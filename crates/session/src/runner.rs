//! The streaming chat runner.
//!
//! Connects a [`Provider`] delta stream to the [`ChatSession`] state
//! machine: one outstanding turn at a time, deltas applied in arrival
//! order, transport failures turned into a completed-with-error turn.

use std::sync::Arc;

use tracing::{debug, warn};

use shepherd_core::provider::{GenerationRequest, Provider, ResponseFormat};

use crate::chat::{ChatSession, TURN_FAILURE_TEXT};

/// What one chat turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The display text of the final answer (or the fixed error text).
    pub answer: String,

    /// Follow-up suggestions for the next turn.
    pub suggestions: Vec<String>,

    /// Whether the turn ended in a transport failure.
    pub failed: bool,
}

/// Drives the consultant chat against a generation backend.
pub struct ChatRunner {
    provider: Arc<dyn Provider>,
    model: String,
    system_instruction: String,
    session: ChatSession,
}

impl ChatRunner {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            system_instruction: system_instruction.into(),
            session: ChatSession::new(),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Submit one message and run the turn to completion or failure.
    ///
    /// Returns `None` when the submission is rejected (blank input, or a
    /// turn already outstanding). `on_delta` is invoked for each raw delta
    /// in arrival order, for live echo.
    pub async fn send<F>(&mut self, text: &str, mut on_delta: F) -> Option<TurnOutcome>
    where
        F: FnMut(&str),
    {
        if !self.session.begin_turn(text) {
            return None;
        }

        let request = GenerationRequest {
            model: self.model.clone(),
            system_instruction: self.system_instruction.clone(),
            messages: self.session.request_messages(),
            response: ResponseFormat::Text,
        };

        debug!(model = %self.model, history = request.messages.len(), "Starting chat turn");

        let mut rx = match self.provider.stream(request).await {
            Ok(rx) => rx,
            Err(e) => {
                warn!(error = %e, "Chat turn failed before streaming started");
                self.session.fail_turn();
                return Some(self.failed_outcome());
            }
        };

        while let Some(delta) = rx.recv().await {
            match delta {
                Ok(text) => {
                    self.session.apply_chunk(&text);
                    on_delta(&text);
                }
                Err(e) => {
                    warn!(error = %e, "Chat turn failed mid-stream");
                    self.session.fail_turn();
                    return Some(self.failed_outcome());
                }
            }
        }

        let answer = self.session.complete_turn();
        Some(TurnOutcome {
            answer,
            suggestions: self.session.suggestions().to_vec(),
            failed: false,
        })
    }

    fn failed_outcome(&self) -> TurnOutcome {
        TurnOutcome {
            answer: TURN_FAILURE_TEXT.into(),
            suggestions: Vec::new(),
            failed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shepherd_core::error::ProviderError;

    /// Streams a fixed sequence of deltas, then optionally an error.
    struct ScriptedProvider {
        deltas: Vec<&'static str>,
        fail_after: bool,
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> Result<String, ProviderError> {
            Ok(self.deltas.concat())
        }

        async fn stream(
            &self,
            _request: GenerationRequest,
        ) -> Result<
            tokio::sync::mpsc::Receiver<Result<String, ProviderError>>,
            ProviderError,
        > {
            let (tx, rx) = tokio::sync::mpsc::channel(8);
            let deltas: Vec<String> = self.deltas.iter().map(|s| s.to_string()).collect();
            let fail_after = self.fail_after;
            tokio::spawn(async move {
                for delta in deltas {
                    if tx.send(Ok(delta)).await.is_err() {
                        return;
                    }
                }
                if fail_after {
                    let _ = tx
                        .send(Err(ProviderError::StreamInterrupted("connection reset".into())))
                        .await;
                }
            });
            Ok(rx)
        }
    }

    fn runner(deltas: Vec<&'static str>, fail_after: bool) -> ChatRunner {
        ChatRunner::new(
            Arc::new(ScriptedProvider { deltas, fail_after }),
            "gemini-2.5-flash",
            "컨설턴트 지침",
        )
    }

    #[tokio::test]
    async fn turn_streams_and_extracts_envelope() {
        let mut runner = runner(
            vec![
                "<final_response>",
                "### 아이디어\n- 감사 설교",
                "</final_response>",
                "<follow_up>\n본문 추천은?\n적용점은?\n</follow_up>",
            ],
            false,
        );

        let mut echoed = String::new();
        let outcome = runner.send("설교 아이디어", |d| echoed.push_str(d)).await.unwrap();

        assert!(!outcome.failed);
        assert!(outcome.answer.starts_with("### 아이디어"));
        assert_eq!(outcome.suggestions.len(), 2);
        // Deltas were echoed in arrival order.
        assert!(echoed.starts_with("<final_response>"));
        assert_eq!(runner.session().messages().len(), 2);
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let mut runner = runner(vec!["답"], false);
        assert!(runner.send("   ", |_| {}).await.is_none());
        assert!(runner.session().messages().is_empty());
    }

    #[tokio::test]
    async fn mid_stream_failure_completes_with_fixed_text() {
        let mut runner = runner(vec!["부분 ", "응답"], true);
        let outcome = runner.send("질문", |_| {}).await.unwrap();

        assert!(outcome.failed);
        assert_eq!(outcome.answer, TURN_FAILURE_TEXT);
        assert!(runner.session().last_turn_failed());
        assert_eq!(
            runner.session().messages().last().unwrap().text,
            TURN_FAILURE_TEXT
        );

        // The session accepts the next turn after the failed one completes.
        let next = runner.send("다시", |_| {}).await;
        assert!(next.is_some());
    }

    #[tokio::test]
    async fn history_grows_one_pair_per_turn() {
        let mut runner = runner(vec!["<final_response>답</final_response>"], false);
        runner.send("하나", |_| {}).await.unwrap();
        runner.send("둘", |_| {}).await.unwrap();
        assert_eq!(runner.session().messages().len(), 4);
    }
}

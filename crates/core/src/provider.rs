//! Provider trait — the abstraction over generation backends.
//!
//! A Provider knows how to send a prompt (or a conversation) to a hosted
//! model and get text back, either complete or as a stream of deltas.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::error::ProviderError;

/// The shape the provider's response must take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResponseFormat {
    /// Free-form text.
    Text,
    /// JSON conforming to the given schema.
    Json { schema: serde_json::Value },
}

impl ResponseFormat {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

/// One generation request.
///
/// Single-shot features carry exactly one user message; the chat mode
/// carries the whole history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model to use (e.g. "gemini-2.5-pro").
    pub model: String,

    /// Top-level system instruction.
    pub system_instruction: String,

    /// The conversation so far, oldest first.
    pub messages: Vec<ChatMessage>,

    /// Free text or schema-constrained JSON.
    pub response: ResponseFormat,
}

impl GenerationRequest {
    /// Build a single-shot request from one user prompt.
    pub fn single(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        user_prompt: impl Into<String>,
        response: ResponseFormat,
    ) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            messages: vec![ChatMessage::user(user_prompt)],
            response,
        }
    }
}

/// The core Provider trait.
///
/// The feature commands call `generate()`; the chat loop calls `stream()`.
/// Neither knows which backend is in use.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send a request and get the complete response text.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<String, ProviderError>;

    /// Send a request and get a finite sequence of text deltas.
    ///
    /// Default implementation calls `generate()` and yields the result as
    /// a single delta.
    async fn stream(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<
        tokio::sync::mpsc::Receiver<std::result::Result<String, ProviderError>>,
        ProviderError,
    > {
        let text = self.generate(request).await?;
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        let _ = tx.send(Ok(text)).await;
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> std::result::Result<String, ProviderError> {
            Ok(request.messages.last().map(|m| m.text.clone()).unwrap_or_default())
        }
    }

    #[test]
    fn single_shot_request_has_one_user_message() {
        let req = GenerationRequest::single("gemini-2.5-pro", "sys", "hello", ResponseFormat::Text);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].text, "hello");
        assert!(!req.response.is_structured());
    }

    #[test]
    fn json_format_is_structured() {
        let fmt = ResponseFormat::Json {
            schema: serde_json::json!({"type": "array"}),
        };
        assert!(fmt.is_structured());
    }

    #[tokio::test]
    async fn default_stream_yields_single_delta() {
        let provider = EchoProvider;
        let req = GenerationRequest::single("m", "s", "delta-me", ResponseFormat::Text);
        let mut rx = provider.stream(req).await.unwrap();

        let first = rx.recv().await.unwrap().unwrap();
        assert_eq!(first, "delta-me");
        assert!(rx.recv().await.is_none());
    }
}

//! Google Gemini provider implementation.
//!
//! Uses the Generative Language REST API directly.
//!
//! Features:
//! - `x-goog-api-key` header authentication
//! - System instruction as a top-level field
//! - Fixed safety thresholds (harassment, hate speech) at "block medium and above"
//! - Structured output via `responseMimeType` + `responseSchema`
//! - Streaming via SSE with incremental candidate deltas

use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use shepherd_core::chat::Role;
use shepherd_core::error::ProviderError;
use shepherd_core::provider::{GenerationRequest, Provider, ResponseFormat};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta";

/// Gemini Generative Language API provider.
pub struct GeminiProvider {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // long-form sermon generation is slow
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/{API_VERSION}/models/{model}:{method}", self.base_url)
    }

    /// Build the request body shared by both call modes.
    fn build_body(request: &GenerationRequest) -> serde_json::Value {
        let contents: Vec<ApiContent> = request
            .messages
            .iter()
            .map(|msg| ApiContent {
                role: match msg.role {
                    Role::User => "user".into(),
                    Role::Model => "model".into(),
                },
                parts: vec![ApiPart {
                    text: msg.text.clone(),
                }],
            })
            .collect();

        let mut body = serde_json::json!({
            "system_instruction": { "parts": [{ "text": request.system_instruction }] },
            "contents": contents,
            "safetySettings": [
                { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
            ],
        });

        match &request.response {
            ResponseFormat::Text => {
                body["generationConfig"] = serde_json::json!({
                    "responseMimeType": "text/plain",
                });
            }
            ResponseFormat::Json { schema } => {
                body["generationConfig"] = serde_json::json!({
                    "responseMimeType": "application/json",
                    "responseSchema": schema,
                });
            }
        }

        body
    }

    /// Map an HTTP error status to a provider error.
    async fn status_error(status: u16, response: reqwest::Response) -> ProviderError {
        match status {
            429 => ProviderError::RateLimited { retry_after_secs: 5 },
            401 | 403 => ProviderError::AuthenticationFailed("Invalid Gemini API key".into()),
            _ => {
                let error_body = response.text().await.unwrap_or_default();
                warn!(status, body = %error_body, "Gemini API error");
                ProviderError::ApiError {
                    status_code: status,
                    message: error_body,
                }
            }
        }
    }

    /// Join all text parts of the first candidate.
    fn extract_text(resp: &ApiResponse) -> Result<String, ProviderError> {
        let candidate = resp.candidates.first().ok_or_else(|| {
            ProviderError::InvalidResponse("response carried no candidates".into())
        })?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();

        Ok(text)
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let url = self.endpoint(&request.model, "generateContent");
        let body = Self::build_body(&request);

        debug!(provider = "gemini", model = %request.model, structured = request.response.is_structured(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Self::status_error(status, response).await);
        }

        let api_resp: ApiResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse Gemini response: {e}"))
        })?;

        if let Some(usage) = &api_resp.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                response_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Token usage"
            );
        }

        Self::extract_text(&api_resp)
    }

    async fn stream(
        &self,
        request: GenerationRequest,
    ) -> Result<
        tokio::sync::mpsc::Receiver<Result<String, ProviderError>>,
        ProviderError,
    > {
        let url = format!(
            "{}?alt=sse",
            self.endpoint(&request.model, "streamGenerateContent")
        );
        let body = Self::build_body(&request);

        debug!(provider = "gemini", model = %request.model, "Sending streaming request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Self::status_error(status, response).await);
        }

        let (tx, rx) = tokio::sync::mpsc::channel(64);

        tokio::spawn(async move {
            let mut byte_stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk_result) = byte_stream.next().await {
                let bytes = match chunk_result {
                    Ok(b) => b,
                    Err(e) => {
                        let _ = tx
                            .send(Err(ProviderError::StreamInterrupted(e.to_string())))
                            .await;
                        return;
                    }
                };

                buffer.push_str(&String::from_utf8_lossy(&bytes));

                while let Some(line_end) = buffer.find('\n') {
                    let line = buffer[..line_end].trim_end_matches('\r').to_string();
                    buffer = buffer[line_end + 1..].to_string();

                    if line.is_empty() || line.starts_with(':') {
                        continue;
                    }

                    let Some(data) = line.strip_prefix("data: ") else {
                        continue;
                    };
                    let data = data.trim();
                    if data.is_empty() || data == "[DONE]" {
                        continue;
                    }

                    let event: ApiResponse = match serde_json::from_str(data) {
                        Ok(v) => v,
                        Err(e) => {
                            trace!(error = %e, data = %data, "Ignoring unparseable Gemini SSE event");
                            continue;
                        }
                    };

                    for candidate in &event.candidates {
                        for part in &candidate.content.parts {
                            if part.text.is_empty() {
                                continue;
                            }
                            if tx.send(Ok(part.text.clone())).await.is_err() {
                                return;
                            }
                        }
                    }
                }
            }
            // Receiver observes end-of-stream by channel close.
        });

        Ok(rx)
    }
}

// --- Gemini API types ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    role: String,
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,

    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    content: ApiContent,

    #[serde(rename = "finishReason", default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,

    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,

    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

//! Error types for the Shepherd domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Shepherd operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Generation errors ---
    #[error("Generation failed: {0}")]
    Generation(#[from] ProviderError),

    // --- Input errors ---
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // --- Structured payload errors ---
    #[error("Malformed result payload: {0}")]
    Parse(#[from] serde_json::Error),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The single user-facing line shown for this error.
    ///
    /// Every error that reaches a view is displayed inline as one string;
    /// nothing propagates to the terminal loop as an unhandled fault.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Generation(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn invalid_argument_displays_context() {
        let err = Error::InvalidArgument("unknown ceremony kind: picnic".into());
        assert!(err.to_string().contains("picnic"));
    }

    #[test]
    fn user_message_is_single_line() {
        let err = Error::Generation(ProviderError::Network("connection refused".into()));
        let msg = err.user_message();
        assert!(!msg.contains('\n'));
        assert!(msg.contains("connection refused"));
    }
}

//! Generation backend implementations for Shepherd.
//!
//! All backends implement the `shepherd_core::Provider` trait. The CLI
//! builds the configured backend once at startup.

pub mod gemini;

pub use gemini::GeminiProvider;

use std::sync::Arc;

use shepherd_core::Provider;
use shepherd_core::error::ProviderError;
use shepherd_config::AppConfig;

/// Build the configured provider.
///
/// A missing API key surfaces here as a typed error, at startup, rather
/// than as a fault deep inside a request.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| ProviderError::NotConfigured("no API key configured".into()))?;

    let provider = GeminiProvider::new(api_key).with_base_url(&config.base_url);
    Ok(Arc::new(provider))
}

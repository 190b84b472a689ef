//! Command implementations.

pub mod chat;
pub mod forms;
pub mod search;

use std::sync::Arc;

use anyhow::{Context, bail};
use shepherd_config::AppConfig;
use shepherd_core::Provider;

/// Load config and build the provider, with a clear first-run message when
/// no API key is available.
pub fn init_provider() -> anyhow::Result<(AppConfig, Arc<dyn Provider>)> {
    let config = AppConfig::load().context("Failed to load config")?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    export GEMINI_API_KEY='AIza...'");
        eprintln!("    export SHEPHERD_API_KEY='AIza...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        eprintln!("  Get a Gemini key at: https://aistudio.google.com/apikey");
        eprintln!();
        bail!("No API key found. See above for setup instructions.");
    }

    let provider = shepherd_providers::build_from_config(&config)
        .context("Failed to initialize generation backend")?;
    Ok((config, provider))
}

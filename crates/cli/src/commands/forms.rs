//! Single-shot form commands: sermon, prayer, bulletin, message, event.
//!
//! Each command builds one `FeatureRequest`, sends one generation request,
//! renders the markup to the terminal, and optionally writes the result to
//! a file.

use std::path::PathBuf;

use anyhow::Context;

use shepherd_core::provider::GenerationRequest;
use shepherd_core::request::{FeatureRequest, SermonStyle};
use shepherd_render::{blocks_to_text, render_markup};

use super::init_provider;

pub async fn run_sermon(
    topic: String,
    scripture: String,
    notes: String,
    styles: Vec<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let styles = parse_styles(&styles)?;
    run_feature(
        FeatureRequest::Sermon {
            topic,
            scripture,
            notes,
            styles,
        },
        out,
    )
    .await
}

pub async fn run_prayer(
    situation: String,
    details: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    run_feature(FeatureRequest::Prayer { situation, details }, out).await
}

pub async fn run_bulletin(
    content_type: String,
    topic: String,
    info: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    run_feature(
        FeatureRequest::Bulletin {
            content_type,
            topic,
            info,
        },
        out,
    )
    .await
}

pub async fn run_message(
    message_type: String,
    situation: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    run_feature(
        FeatureRequest::PersonalMessage {
            message_type,
            situation,
        },
        out,
    )
    .await
}

pub async fn run_event(
    kind: String,
    names: String,
    details: String,
    scripture: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    run_feature(
        FeatureRequest::Event {
            kind,
            names,
            details,
            scripture,
        },
        out,
    )
    .await
}

fn parse_styles(keys: &[String]) -> anyhow::Result<Vec<SermonStyle>> {
    keys.iter()
        .map(|key| {
            key.parse::<SermonStyle>().map_err(|e| {
                anyhow::anyhow!(
                    "{e} (expected one of: {})",
                    SermonStyle::ALL
                        .iter()
                        .map(|s| s.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
        })
        .collect()
}

/// Shared request/render/export pipeline for the single-shot features.
async fn run_feature(request: FeatureRequest, out: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, provider) = init_provider()?;
    let feature = request.feature_name();

    let prompt = shepherd_prompts::build(&request)?;
    let generation = GenerationRequest::single(
        &config.model,
        prompt.system_instruction,
        prompt.user_prompt,
        prompt.response,
    );

    eprint!("  생성 중...");
    let content = match provider.generate(generation).await {
        Ok(content) => {
            eprint!("\r            \r");
            content
        }
        Err(e) => {
            eprint!("\r            \r");
            anyhow::bail!("{}", shepherd_core::Error::from(e).user_message());
        }
    };

    println!();
    println!("{}", blocks_to_text(&render_markup(&content)));

    if let Some(path) = out {
        // A directory target gets the date-stamped default filename.
        let path = if path.is_dir() {
            path.join(shepherd_export::result_filename_today(feature))
        } else {
            path
        };
        let text = shepherd_export::result_text(feature, &content);
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  저장됨: {}", path.display());
    }

    Ok(())
}

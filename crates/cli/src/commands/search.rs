//! `shepherd search` — scripture search with interactive pagination.
//!
//! Each "load more" page instructs the model to exclude every reference
//! already accumulated. An empty page is surfaced distinctly; a failed
//! page leaves the accumulated results intact.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use shepherd_core::provider::GenerationRequest;
use shepherd_core::request::FeatureRequest;
use shepherd_render::{blocks_to_text, render_scripture};
use shepherd_session::{MergeOutcome, SearchSession};

use super::init_provider;

pub async fn run(query: String, out: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, provider) = init_provider()?;
    let mut session = SearchSession::new(&query);

    loop {
        let request = FeatureRequest::ScriptureSearch {
            query: session.query().to_string(),
            exclude: session.results().to_vec(),
        };
        let prompt = shepherd_prompts::build(&request)?;
        let generation = GenerationRequest::single(
            &config.model,
            prompt.system_instruction,
            prompt.user_prompt,
            prompt.response,
        );

        eprint!("  검색 중...");
        let page = provider.generate(generation).await;
        eprint!("\r            \r");

        match page {
            Ok(payload) => match session.absorb(&payload) {
                Ok(MergeOutcome::Merged(_)) => {
                    println!();
                    println!("{}", blocks_to_text(&render_scripture(&session.payload())));
                }
                Ok(MergeOutcome::NoNewResults) => {
                    println!();
                    println!("  더 이상 찾을 수 있는 결과가 없습니다.");
                    break;
                }
                Err(e) => {
                    // Prior pages stay on screen and in the accumulator.
                    eprintln!("  [오류] {}", e.user_message());
                    break;
                }
            },
            Err(e) => {
                eprintln!(
                    "  [오류] {}",
                    shepherd_core::Error::from(e).user_message()
                );
                break;
            }
        }

        if !prompt_load_more()? {
            break;
        }
    }

    if let Some(path) = out {
        if session.results().is_empty() {
            anyhow::bail!("no results to save");
        }
        let path = if path.is_dir() {
            path.join(shepherd_export::result_filename_today("scripture_search"))
        } else {
            path
        };
        let text = shepherd_export::result_text("scripture_search", &session.payload());
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  저장됨: {}", path.display());
    }

    Ok(())
}

fn prompt_load_more() -> anyhow::Result<bool> {
    print!("  결과 더 보기? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

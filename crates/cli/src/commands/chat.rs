//! `shepherd chat` — interactive consultant chat.
//!
//! Streams each reply, lists follow-up question suggestions after every
//! turn, and exports the transcript on `/save`.

use std::io::Write;

use anyhow::Context;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use shepherd_export::{TRANSCRIPT_FILENAME, transcript_html, transcript_text};
use shepherd_prompts::{CHAT_EXAMPLE_PROMPTS, consultant_instruction};
use shepherd_session::ChatRunner;

use super::init_provider;

const TRANSCRIPT_HTML_FILENAME: &str = "목회_AI_컨설턴트_대화기록.html";

pub async fn run() -> anyhow::Result<()> {
    let (config, provider) = init_provider()?;
    let mut runner = ChatRunner::new(provider, &config.chat_model, consultant_instruction());

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║       목회 AI 컨설턴트 — Interactive Mode       ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Model: {}", config.chat_model);
    println!();
    println!("  예시 질문:");
    for prompt in CHAT_EXAMPLE_PROMPTS {
        println!("    - {prompt}");
    }
    println!();
    println!("  메시지를 입력하고 Enter를 누르세요.");
    println!("  '/save'로 대화 기록을 저장하고, 'exit'로 종료합니다.");
    println!();

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    print_input_prompt()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            print_input_prompt()?;
            continue;
        }

        if matches!(line.as_str(), "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        if line == "/save" {
            save_transcript(&runner)?;
            print_input_prompt()?;
            continue;
        }

        // Streamed deltas tick on stderr; the rendered answer follows once
        // the envelope is complete (control markers never hit the screen).
        let outcome = runner
            .send(&line, |_delta| {
                eprint!(".");
            })
            .await;
        eprint!("\r\x1b[K");

        match outcome {
            Some(outcome) if outcome.failed => {
                eprintln!("  [오류] {}", outcome.answer);
                println!();
            }
            Some(outcome) => {
                println!();
                let rendered =
                    shepherd_render::blocks_to_text(&shepherd_render::render_markup(&outcome.answer));
                for line in rendered.lines() {
                    println!("  컨설턴트 > {line}");
                }
                if !outcome.suggestions.is_empty() {
                    println!();
                    println!("  추가 질문 제안:");
                    for suggestion in &outcome.suggestions {
                        println!("    - {suggestion}");
                    }
                }
                println!();
            }
            None => {
                // Rejected submission (a turn is still outstanding).
                eprintln!("  [알림] 이전 요청이 끝난 뒤에 다시 시도해주세요.");
            }
        }

        print_input_prompt()?;
    }

    println!();
    println!("  평안히 가세요!");
    println!();

    Ok(())
}

fn print_input_prompt() -> anyhow::Result<()> {
    print!("  목회자 > ");
    std::io::stdout().flush()?;
    Ok(())
}

fn save_transcript(runner: &ChatRunner) -> anyhow::Result<()> {
    let messages = runner.session().messages();
    if messages.is_empty() {
        println!("  저장할 대화 내용이 없습니다.");
        return Ok(());
    }

    std::fs::write(TRANSCRIPT_HTML_FILENAME, transcript_html(messages))
        .with_context(|| format!("Failed to write {TRANSCRIPT_HTML_FILENAME}"))?;
    std::fs::write(TRANSCRIPT_FILENAME, transcript_text(messages))
        .with_context(|| format!("Failed to write {TRANSCRIPT_FILENAME}"))?;

    println!("  저장됨: {TRANSCRIPT_HTML_FILENAME}, {TRANSCRIPT_FILENAME}");
    Ok(())
}

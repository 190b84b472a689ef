//! Shepherd CLI — the main entry point.
//!
//! Commands:
//! - `sermon`   — Draft a full sermon manuscript
//! - `prayer`   — Draft a representative prayer
//! - `search`   — Scripture passage search with "load more" pagination
//! - `bulletin` — Bulletin / announcement copy
//! - `message`  — Short personal message for a congregant
//! - `event`    — Ceremony content (wedding, funeral, newborn, graduation)
//! - `chat`     — Interactive consultant chat with transcript export

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "shepherd",
    about = "Shepherd — ministry content assistant for Presbyterian pastors",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a full sermon manuscript
    Sermon {
        /// Sermon topic (e.g. "믿음의 능력")
        #[arg(short, long)]
        topic: String,

        /// Scripture passage (e.g. "히브리서 11:1-6")
        #[arg(short, long)]
        scripture: String,

        /// Key message and notes to weave in
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Style emphasis, repeatable (e.g. --style practical --style youth)
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Write the result to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Draft a representative prayer
    Prayer {
        /// Prayer occasion (e.g. "주일 낮예배 대표기도")
        #[arg(short, long)]
        situation: String,

        /// Specific topics to include
        #[arg(short, long, default_value = "")]
        details: String,

        /// Write the result to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Search scripture passages (interactive "load more" pagination)
    Search {
        /// Passage, theme, or phrase to search for
        query: String,

        /// Write the accumulated results to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Draft bulletin or announcement copy
    Bulletin {
        /// Content kind (e.g. "주간 광고", "목회 칼럼", "행사 안내")
        #[arg(short, long)]
        kind: String,

        /// Topic or event name
        #[arg(short, long)]
        topic: String,

        /// Key information (date, time, place, ...)
        #[arg(short, long, default_value = "")]
        info: String,

        /// Write the result to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Draft a short personal message for a congregant
    Message {
        /// Message kind (e.g. "위로/격려", "새신자 환영")
        #[arg(short, long)]
        kind: String,

        /// Recipient and situation
        #[arg(short, long)]
        situation: String,

        /// Write the result to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Draft ceremony content
    Event {
        /// Ceremony kind: wedding, funeral, newborn, graduation
        #[arg(short, long)]
        kind: String,

        /// Who the ceremony is for
        #[arg(short, long)]
        names: String,

        /// Details to include
        #[arg(short, long, default_value = "")]
        details: String,

        /// Reference scripture passage (optional)
        #[arg(short, long, default_value = "")]
        scripture: String,

        /// Write the result to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Interactive consultant chat
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Sermon {
            topic,
            scripture,
            notes,
            styles,
            out,
        } => commands::forms::run_sermon(topic, scripture, notes, styles, out).await?,
        Commands::Prayer {
            situation,
            details,
            out,
        } => commands::forms::run_prayer(situation, details, out).await?,
        Commands::Search { query, out } => commands::search::run(query, out).await?,
        Commands::Bulletin {
            kind,
            topic,
            info,
            out,
        } => commands::forms::run_bulletin(kind, topic, info, out).await?,
        Commands::Message {
            kind,
            situation,
            out,
        } => commands::forms::run_message(kind, situation, out).await?,
        Commands::Event {
            kind,
            names,
            details,
            scripture,
            out,
        } => commands::forms::run_event(kind, names, details, scripture, out).await?,
        Commands::Chat => commands::chat::run().await?,
    }

    Ok(())
}

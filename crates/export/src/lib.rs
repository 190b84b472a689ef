//! Result and transcript export for Shepherd.
//!
//! Two artifact shapes: plain text (feature results, chat transcripts) and
//! a standalone HTML document for chat transcripts that preserves the
//! heading/bold/list structure of the rendered markup.

pub mod html;
pub mod plain;

pub use html::{blocks_to_html, transcript_html};
pub use plain::{
    TRANSCRIPT_FILENAME, result_filename, result_filename_today, result_text, transcript_text,
};

//! Lightweight markup rendering for Shepherd results.
//!
//! Generated text arrives with a constrained markup subset (headings, bold
//! spans, bullet lists). A single-pass line scanner converts it into a
//! structured block sequence that display layers serialize however they
//! need — terminal text, HTML, plain text for export.

pub mod markup;
pub mod scripture;
pub mod text;

pub use markup::{Block, Inline, render_markup};
pub use scripture::{format_for_copy, render_scripture};
pub use text::blocks_to_text;

//! Prompt construction for the Shepherd ministry features.
//!
//! Pure functions mapping one [`FeatureRequest`] to the
//! (system instruction, user prompt, response format) triple the generation
//! client sends out. No side effects; the only failure mode is an
//! unrecognized event kind.

mod builder;
mod consultant;

pub use builder::{Prompt, build};
pub use consultant::{CHAT_EXAMPLE_PROMPTS, consultant_instruction};

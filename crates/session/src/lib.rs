//! Conversation and search session state for Shepherd.
//!
//! Each view owns its state exclusively: the chat view owns a
//! [`ChatSession`] (one outstanding turn at a time), the search view owns
//! a [`SearchSession`] (append-only result accumulator). Nothing here is
//! shared across views.

pub mod chat;
pub mod runner;
pub mod search;

pub use chat::{ChatSession, TURN_FAILURE_TEXT, TurnPhase, final_answer, follow_up_suggestions};
pub use runner::{ChatRunner, TurnOutcome};
pub use search::{MergeOutcome, SearchSession, merge_batch};

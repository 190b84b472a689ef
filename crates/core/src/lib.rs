//! # Shepherd Core
//!
//! Domain types, traits, and error definitions for the Shepherd ministry
//! assistant. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The generation backend is defined as a trait here; the concrete client
//! lives in its own crate. This enables:
//! - Swapping backends via configuration
//! - Easy testing with mock implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod chat;
pub mod error;
pub mod provider;
pub mod request;
pub mod scripture;

// Re-export key types at crate root for ergonomics
pub use chat::{ChatMessage, Role};
pub use error::{Error, ProviderError, Result};
pub use provider::{GenerationRequest, Provider, ResponseFormat};
pub use request::{EventKind, FeatureRequest, SermonStyle};
pub use scripture::ScriptureResultItem;

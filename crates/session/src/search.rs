//! Paginated scripture search: batch merging and the result accumulator.
//!
//! "Load more" pages arrive as serialized result arrays and are appended
//! to the accumulator in order. No de-duplication by reference is
//! performed; repeated pages may resurface identical passages (current
//! behavior, pinned by tests below, not a guaranteed contract).

use tracing::warn;

use shepherd_core::error::{Error, ProviderError, Result};
use shepherd_core::scripture::{ScriptureResultItem, parse_results};

/// Outcome of merging one incoming batch into the accumulated results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The incoming batch held nothing new; the accumulator is unchanged.
    /// Callers must surface this distinctly from success.
    NoNewResults,

    /// The merged sequence, existing items first, incoming items after.
    Merged(Vec<ScriptureResultItem>),
}

/// Merge a new serialized batch into the existing serialized results.
///
/// A malformed existing payload is treated as empty (accepted data loss,
/// logged); a malformed incoming payload is a generation failure and the
/// existing results stay intact.
pub fn merge_batch(existing: &str, incoming: &str) -> Result<MergeOutcome> {
    let existing_items = match parse_results(existing) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Discarding unparseable accumulated results");
            Vec::new()
        }
    };

    let incoming_items = parse_results(incoming).map_err(|e| {
        Error::Generation(ProviderError::InvalidResponse(format!(
            "search batch was not a valid result array: {e}"
        )))
    })?;

    if incoming_items.is_empty() {
        return Ok(MergeOutcome::NoNewResults);
    }

    let mut merged = existing_items;
    merged.extend(incoming_items);
    Ok(MergeOutcome::Merged(merged))
}

/// The search view's accumulator: one query, append-only results.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<ScriptureResultItem>,
}

impl SearchSession {
    /// Start a session for a fresh query (clears any prior results).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Accumulated results, in arrival order.
    pub fn results(&self) -> &[ScriptureResultItem] {
        &self.results
    }

    /// The serialized accumulator (used for exclusion prompts, display,
    /// and export).
    pub fn payload(&self) -> String {
        serde_json::to_string(&self.results).unwrap_or_else(|_| "[]".into())
    }

    /// Absorb one incoming serialized batch.
    ///
    /// On `Merged` the accumulator is replaced with the merged sequence;
    /// on `NoNewResults` or error it is left untouched.
    pub fn absorb(&mut self, incoming: &str) -> Result<MergeOutcome> {
        let outcome = merge_batch(&self.payload(), incoming)?;
        if let MergeOutcome::Merged(items) = &outcome {
            self.results = items.clone();
        }
        Ok(outcome)
    }

    /// Drop all results and switch to a new query.
    pub fn reset(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results.clear();
    }
}

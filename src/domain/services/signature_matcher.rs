//! Signature matching
//!
//! Walks the registry in its own order and reports the first signature the
//! buffer starts with. Since the registry orders signatures longest-first,
//! the first hit is also the longest one.

use super::SignatureRegistry;
use crate::domain::entities::TypeLabel;
use serde::Serialize;

/// What the matcher concluded about a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "label", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The buffer has no bytes; matching was not attempted
    Empty,
    /// No registered signature prefixes the buffer
    NoMatch,
    /// The buffer starts with the signature registered for this label
    Matched(TypeLabel),
}

impl MatchOutcome {
    /// Returns the matched label, if any
    pub fn label(&self) -> Option<&TypeLabel> {
        match self {
            MatchOutcome::Matched(label) => Some(label),
            MatchOutcome::Empty | MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Identifies `buffer` against `registry`
///
/// An empty buffer short-circuits to [`MatchOutcome::Empty`]. Signatures longer
/// than the buffer are skipped, so short buffers yield
/// [`MatchOutcome::NoMatch`] rather than reading past the end.
pub fn match_signature(buffer: &[u8], registry: &SignatureRegistry) -> MatchOutcome {
    if buffer.is_empty() {
        tracing::debug!("buffer is empty, skipping signature match");
        return MatchOutcome::Empty;
    }

    for (signature, label) in registry {
        if signature.matches_header(buffer) {
            tracing::debug!(%signature, %label, "signature matched");
            return MatchOutcome::Matched(label.clone());
        }
    }

    tracing::debug!(len = buffer.len(), "no registered signature matched");
    MatchOutcome::NoMatch
}

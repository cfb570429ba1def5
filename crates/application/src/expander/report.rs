//! Per-call record of what an expansion pass did.

use envexpand_domain::ResolvedValue;

use crate::error::ApplicationError;

/// Why a reference was cut short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncationKind {
    /// The key was already being resolved further up.
    Cycle {
        /// Keys being resolved at that point, outermost first.
        chain: Vec<String>,
    },
    /// Nesting reached the configured bound.
    Depth {
        /// The bound that was hit.
        max_depth: usize,
    },
}

/// A reference that resolved to an empty string because it could not be
/// followed safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Top-level config key whose value was being expanded.
    pub origin: String,
    /// The referenced key that was cut short.
    pub key: String,
    /// What stopped resolution.
    pub kind: TruncationKind,
}

impl From<Truncation> for ApplicationError {
    fn from(truncation: Truncation) -> Self {
        match truncation.kind {
            TruncationKind::Cycle { chain } => Self::CyclicReference {
                key: truncation.key,
                chain,
            },
            TruncationKind::Depth { max_depth } => Self::DepthExceeded {
                key: truncation.key,
                max_depth,
            },
        }
    }
}

/// Summary of one expansion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Every top-level key with its final value, in key order.
    pub resolved: Vec<ResolvedValue>,

    /// Referenced keys that had no value in either source.
    pub unresolved: Vec<String>,

    /// Top-level keys that took an escape rule instead of interpolation.
    pub escaped: Vec<String>,

    /// References cut short by the cycle or depth guard.
    pub truncated: Vec<Truncation>,
}

impl ExpansionReport {
    /// Returns true if no reference was truncated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.truncated.is_empty()
    }

    /// Returns the count of top-level keys.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    pub(crate) fn note_unresolved(&mut self, key: &str) {
        if !self.unresolved.iter().any(|k| k == key) {
            self.unresolved.push(key.to_string());
        }
    }
}

//! Expansion options.

use serde::{Deserialize, Serialize};

use crate::resolution::ValueSource;

/// Default bound on nested resolution depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling an expansion pass.
///
/// Deserializes from `{ "envFirst": bool }`; missing fields take their
/// defaults and unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpandOptions {
    /// Prefer the environment store over the config mapping when both hold a value.
    pub env_first: bool,

    /// Maximum nesting of reference resolution before truncating.
    pub max_depth: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            env_first: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExpandOptions {
    /// Creates options with defaults (`env_first = true`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precedence flag.
    #[must_use]
    pub const fn with_env_first(mut self, env_first: bool) -> Self {
        self.env_first = env_first;
        self
    }

    /// Sets the nesting bound.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Order in which value sources are consulted.
    #[must_use]
    pub const fn precedence(&self) -> [ValueSource; 2] {
        if self.env_first {
            [ValueSource::Environment, ValueSource::Config]
        } else {
            [ValueSource::Config, ValueSource::Environment]
        }
    }
}

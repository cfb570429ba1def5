//! The configuration record handed to the expander.
//!
//! A record is shaped as `{ "parsed": { KEY: value, ... }, ... }`. Only the
//! `parsed` field is read and rewritten; every other field rides along
//! untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Flat mapping of configuration keys to raw or resolved string values.
pub type ConfigMap = BTreeMap<String, String>;

/// A parsed configuration record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedConfig {
    /// Key-value pairs produced by the file parser.
    #[serde(default)]
    pub parsed: ConfigMap,

    /// Any other fields of the record, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ParsedConfig {
    /// Creates a record with no entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from key-value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parsed: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            extra: serde_json::Map::new(),
        }
    }

    /// Adds an entry, replacing any previous value for the key.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parsed.insert(key.into(), value.into());
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parsed.get(key).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    /// Returns true if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }

    /// Checks that every key is identifier-like.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidKey`] for the first offending key.
    pub fn validate_keys(&self) -> DomainResult<()> {
        match self.parsed.keys().find(|key| !is_valid_key(key)) {
            Some(key) => Err(DomainError::InvalidKey(key.clone())),
            None => Ok(()),
        }
    }
}

/// Returns true if `c` may appear in a key.
#[must_use]
pub const fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validates a key: non-empty, ASCII letters, digits and underscore only.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_key_char)
}

//! Where a resolved value came from.

use std::fmt;

/// A source a value can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// The configuration mapping being expanded.
    Config,
    /// The environment store.
    Environment,
}

impl ValueSource {
    /// Returns the other source.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Config => Self::Environment,
            Self::Environment => Self::Config,
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// A top-level key after expansion, with the source its raw value was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    /// The configuration key.
    pub key: String,
    /// The final value.
    pub value: String,
    /// Source of the raw value, or `None` when neither source had one.
    pub source: Option<ValueSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_source() {
        assert_eq!(ValueSource::Config.other(), ValueSource::Environment);
        assert_eq!(ValueSource::Environment.other(), ValueSource::Config);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueSource::Config.to_string(), "config");
        assert_eq!(ValueSource::Environment.to_string(), "environment");
    }
}

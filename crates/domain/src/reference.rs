//! Reference syntax found inside configuration values.

use std::ops::Range;

/// The surface form a reference was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxForm {
    /// `$KEY`
    Bare,
    /// `${KEY}`
    Braced,
    /// `${KEY:-default}` or, when `colon` is false, `${KEY-default}`.
    BracedDefault {
        /// Whether the `:` separator was present.
        colon: bool,
    },
}

/// A parsed reference inside a value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Key to look up.
    pub key: String,

    /// Raw default text, which may itself contain references.
    pub default: Option<String>,

    /// How the reference was written.
    pub form: SyntaxForm,

    /// Byte range in the scanned string.
    pub span: Range<usize>,
}

impl Reference {
    /// Creates a bare `$KEY` reference.
    #[must_use]
    pub fn bare(key: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            key: key.into(),
            default: None,
            form: SyntaxForm::Bare,
            span,
        }
    }

    /// Creates a `${KEY}` reference.
    #[must_use]
    pub fn braced(key: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            key: key.into(),
            default: None,
            form: SyntaxForm::Braced,
            span,
        }
    }

    /// Creates a `${KEY:-default}` / `${KEY-default}` reference.
    #[must_use]
    pub fn with_default(
        key: impl Into<String>,
        default: impl Into<String>,
        colon: bool,
        span: Range<usize>,
    ) -> Self {
        Self {
            key: key.into(),
            default: Some(default.into()),
            form: SyntaxForm::BracedDefault { colon },
            span,
        }
    }

    /// Returns true if the reference carries a default.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

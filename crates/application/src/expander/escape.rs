//! Escaped dollar signs that switch expansion off for a value.

/// The escape rule a config value matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeRule {
    /// The value starts with `\$`: drop the leading backslash.
    Leading,
    /// The value contains `\$` later on: every `\$` becomes `$`.
    Inline,
}

const ESCAPED_DOLLAR: &str = "\\$";

impl EscapeRule {
    /// Detects which rule, if any, applies to the raw config text.
    #[must_use]
    pub fn detect(raw: &str) -> Option<Self> {
        if raw.starts_with(ESCAPED_DOLLAR) {
            Some(Self::Leading)
        } else if raw.contains(ESCAPED_DOLLAR) {
            Some(Self::Inline)
        } else {
            None
        }
    }

    /// Applies the rule to the value selected by precedence, which may come
    /// from the environment rather than the config text the rule was
    /// detected on. The result is final and is not interpolated.
    ///
    /// `Leading` only strips a backslash that is actually there.
    #[must_use]
    pub fn apply(self, selected: &str) -> String {
        match self {
            Self::Leading => selected.strip_prefix('\\').unwrap_or(selected).to_string(),
            Self::Inline => selected.replace(ESCAPED_DOLLAR, "$"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leading_escape() {
        assert_eq!(EscapeRule::detect("\\$ESCAPED"), Some(EscapeRule::Leading));
        assert_eq!(EscapeRule::Leading.apply("\\$ESCAPED"), "$ESCAPED");
    }

    #[test]
    fn test_leading_escape_strips_only_first_backslash() {
        assert_eq!(EscapeRule::Leading.apply("\\$A\\$B"), "$A\\$B");
    }

    #[test]
    fn test_leading_escape_on_unescaped_selected_value() {
        assert_eq!(EscapeRule::Leading.apply("10"), "10");
    }

    #[test]
    fn test_inline_escape() {
        assert_eq!(EscapeRule::detect("pa\\$\\$word"), Some(EscapeRule::Inline));
        assert_eq!(EscapeRule::Inline.apply("pa\\$\\$word"), "pa$$word");
    }

    #[test]
    fn test_no_escape() {
        assert_eq!(EscapeRule::detect("${BASIC}"), None);
        assert_eq!(EscapeRule::detect("back\\slash"), None);
        assert_eq!(EscapeRule::detect("plain"), None);
    }
}

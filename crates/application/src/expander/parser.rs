//! Reference parser for `$KEY` and `${KEY...}` syntax
//!
//! Scans a string left to right and extracts non-overlapping references
//! with their byte positions.

use envexpand_domain::{Reference, is_key_char};

/// Parses a string and extracts all variable references.
///
/// Supports:
/// - `$KEY` - bare reference
/// - `${KEY}` - braced reference
/// - `${KEY:-default}` and `${KEY-default}` - braced reference with a default
///
/// A default may contain nested references. Its braces are matched by depth,
/// so `${A:-${B:-x}}` is one reference whose default is `${B:-x}`. Defaults
/// are limited to ASCII letters, digits and `_ - $ { } :`; a braced form that
/// breaks those rules is not a reference, and scanning resumes at the next
/// character.
///
/// # Examples
///
/// ```
/// use envexpand_application::expander::parser::parse_references;
///
/// let refs = parse_references("$HOST:${PORT:-8080}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].key, "HOST");
/// assert_eq!(refs[1].key, "PORT");
/// assert_eq!(refs[1].default.as_deref(), Some("8080"));
/// ```
#[must_use]
pub fn parse_references(input: &str) -> Vec<Reference> {
    let bytes = input.as_bytes();
    let mut references = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'$'
            && let Some(reference) = scan_reference(input, pos)
        {
            pos = reference.span.end;
            references.push(reference);
            continue;
        }
        pos += 1;
    }

    references
}

/// Tries to read a reference starting at the `$` at `start`.
fn scan_reference(input: &str, start: usize) -> Option<Reference> {
    let bytes = input.as_bytes();
    let after_dollar = start + 1;

    match bytes.get(after_dollar) {
        Some(&b'{') => scan_braced(input, start),
        Some(&b) if is_key_char(char::from(b)) => {
            let end = key_end(bytes, after_dollar);
            Some(Reference::bare(&input[after_dollar..end], start..end))
        }
        _ => None,
    }
}

fn scan_braced(input: &str, start: usize) -> Option<Reference> {
    let bytes = input.as_bytes();
    let key_start = start + 2;
    let key_stop = key_end(bytes, key_start);
    if key_stop == key_start {
        return None;
    }
    let key = &input[key_start..key_stop];

    let (default_start, colon) = match bytes.get(key_stop)? {
        b'}' => return Some(Reference::braced(key, start..key_stop + 1)),
        b':' if bytes.get(key_stop + 1) == Some(&b'-') => (key_stop + 2, true),
        b'-' => (key_stop + 1, false),
        _ => return None,
    };

    let close = matching_brace(bytes, default_start)?;
    if close == default_start {
        return None;
    }

    Some(Reference::with_default(
        key,
        &input[default_start..close],
        colon,
        start..close + 1,
    ))
}

/// Returns the index one past the last key character from `from`.
fn key_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !is_key_char(char::from(b)))
        .map_or(bytes.len(), |offset| from + offset)
}

/// Finds the `}` closing a default body that starts at `from`.
fn matching_brace(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(from + offset),
            b'}' => depth -= 1,
            _ if is_default_char(b) => {}
            _ => return None,
        }
    }
    None
}

const fn is_default_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'$' | b'{' | b'}' | b':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use envexpand_domain::SyntaxForm;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bare_reference() {
        let refs = parse_references("$BASIC");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "BASIC");
        assert_eq!(refs[0].form, SyntaxForm::Bare);
        assert_eq!(refs[0].span, 0..6);
    }

    #[test]
    fn test_parse_braced_reference() {
        let refs = parse_references("${BASIC}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "BASIC");
        assert_eq!(refs[0].form, SyntaxForm::Braced);
        assert_eq!(refs[0].default, None);
        assert_eq!(refs[0].span, 0..8);
    }

    #[test]
    fn test_parse_default_with_colon() {
        let refs = parse_references("${UNDEFINED:-defaultValue}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "UNDEFINED");
        assert_eq!(refs[0].default.as_deref(), Some("defaultValue"));
        assert_eq!(refs[0].form, SyntaxForm::BracedDefault { colon: true });
    }

    #[test]
    fn test_parse_default_without_colon() {
        let refs = parse_references("${UNDEFINED-fallback}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "UNDEFINED");
        assert_eq!(refs[0].default.as_deref(), Some("fallback"));
        assert_eq!(refs[0].form, SyntaxForm::BracedDefault { colon: false });
    }

    #[test]
    fn test_parse_nested_default() {
        let input = "mongodb://${UNDEFINED:-${UNDEFINED_TWO:-${MONGOLAB_USER}}}";
        let refs = parse_references(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "UNDEFINED");
        assert_eq!(
            refs[0].default.as_deref(),
            Some("${UNDEFINED_TWO:-${MONGOLAB_USER}}")
        );
        assert_eq!(refs[0].span, 10..input.len());
    }

    #[test]
    fn test_adjacent_braced_references_stay_separate() {
        let refs = parse_references("${A:-x}${B}");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].default.as_deref(), Some("x"));
        assert_eq!(refs[1].key, "B");
    }

    #[test]
    fn test_parse_multiple_references() {
        let refs = parse_references(
            "mongodb://$MONGOLAB_USER:$MONGOLAB_PASSWORD@$MONGOLAB_DOMAIN:$MONGOLAB_PORT/$MONGOLAB_DATABASE",
        );
        let keys: Vec<&str> = refs.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "MONGOLAB_USER",
                "MONGOLAB_PASSWORD",
                "MONGOLAB_DOMAIN",
                "MONGOLAB_PORT",
                "MONGOLAB_DATABASE"
            ]
        );
    }

    #[test]
    fn test_no_references() {
        assert!(parse_references("plain value").is_empty());
        assert!(parse_references("cost: 5$").is_empty());
        assert!(parse_references("$ alone").is_empty());
    }

    #[test]
    fn test_empty_braces_are_literal() {
        assert!(parse_references("${}").is_empty());
        assert!(parse_references("${A:-}").is_empty());
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert!(parse_references("${NAME").is_empty());
        assert!(parse_references("${NAME:-default").is_empty());
    }

    #[test]
    fn test_illegal_default_character_rejects_braced_form() {
        // The space is not allowed in a default, so only the inner `$B` is a reference.
        let refs = parse_references("${A:-x $B}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].key, "B");
        assert_eq!(refs[0].form, SyntaxForm::Bare);
    }

    #[test]
    fn test_reference_stops_at_non_key_character() {
        let input = "$HOME/bin";
        let refs = parse_references(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "$HOME");
    }

    #[test]
    fn test_spans_with_multibyte_text() {
        let input = "héllo ${NAME} wörld";
        let refs = parse_references(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "${NAME}");
    }
}

//! JSON readers for configuration records and options.

use envexpand_domain::{DomainError, DomainResult, ExpandOptions, ParsedConfig};

/// Reads a `{ "parsed": { ... }, ... }` record.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRecord`] if the JSON is malformed or a
/// `parsed` value is not a string.
pub fn parse_record(json: &str) -> DomainResult<ParsedConfig> {
    serde_json::from_str(json).map_err(|e| DomainError::InvalidRecord(e.to_string()))
}

/// Reads `{ "envFirst": bool }` options. Unknown keys are ignored.
///
/// # Errors
///
/// Returns [`DomainError::InvalidOptions`] if the JSON is malformed or a
/// known option has the wrong type.
pub fn parse_options(json: &str) -> DomainResult<ExpandOptions> {
    serde_json::from_str(json).map_err(|e| DomainError::InvalidOptions(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_record_keeps_extra_fields() {
        let record = parse_record(r#"{"parsed": {"BASIC": "basic"}, "error": null}"#)
            .expect("record should parse");

        assert_eq!(record.get("BASIC"), Some("basic"));
        assert_eq!(record.extra.get("error"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_parse_record_rejects_non_string_values() {
        let result = parse_record(r#"{"parsed": {"PORT": 8080}}"#);
        assert!(matches!(result, Err(DomainError::InvalidRecord(_))));
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options(r#"{"envFirst": false, "unknown": "ignored"}"#)
            .expect("options should parse");
        assert!(!options.env_first);

        let options = parse_options("{}").expect("options should parse");
        assert_eq!(options, ExpandOptions::default());
    }

    #[test]
    fn test_parse_options_rejects_wrong_type() {
        let result = parse_options(r#"{"envFirst": "yes"}"#);
        assert!(matches!(result, Err(DomainError::InvalidOptions(_))));
    }
}

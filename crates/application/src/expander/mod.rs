//! Variable expansion module
//!
//! Provides parsing and resolution of `$KEY`, `${KEY}` and
//! `${KEY:-default}` references in configuration values.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use envexpand_application::Expander;
//! use envexpand_domain::{ExpandOptions, ParsedConfig};
//!
//! let mut env = HashMap::from([("HOST".to_string(), "localhost".to_string())]);
//! let config = ParsedConfig::from_pairs([("URL", "http://$HOST:${PORT:-8080}")]);
//!
//! let mut expander = Expander::new(&mut env, ExpandOptions::default());
//! let config = expander.expand(config);
//! assert_eq!(config.get("URL"), Some("http://localhost:8080"));
//! ```

pub mod engine;
pub mod escape;
pub mod parser;
pub mod report;

pub use engine::{Expander, expand};
pub use escape::EscapeRule;
pub use parser::parse_references;
pub use report::{ExpansionReport, Truncation, TruncationKind};

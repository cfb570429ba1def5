//! Envexpand Domain - Core expansion types
//!
//! This crate defines the data model for expanding variable references in a
//! parsed configuration mapping. All types here are pure Rust with no I/O
//! dependencies.

pub mod config;
pub mod error;
pub mod options;
pub mod reference;
pub mod resolution;

pub use config::{ConfigMap, ParsedConfig, is_key_char, is_valid_key};
pub use error::{DomainError, DomainResult};
pub use options::{DEFAULT_MAX_DEPTH, ExpandOptions};
pub use reference::{Reference, SyntaxForm};
pub use resolution::{ResolvedValue, ValueSource};

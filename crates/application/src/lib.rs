//! Envexpand Application - Expansion engine
//!
//! Resolves `$KEY`, `${KEY}` and `${KEY:-default}` references in a parsed
//! configuration mapping against the mapping itself and an injected
//! environment store, then writes the results back into the store.

pub mod error;
pub mod expander;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
pub use expander::{ExpansionReport, Expander, Truncation, TruncationKind, expand};
pub use ports::EnvironmentStore;

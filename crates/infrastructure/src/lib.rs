//! Envexpand Infrastructure - Adapters and implementations
//!
//! This crate binds the expansion engine to the process environment and
//! provides JSON readers for the configuration record and options.

pub mod adapters;
pub mod serialization;

use envexpand_application::{ApplicationResult, Expander};
use envexpand_domain::{ExpandOptions, ParsedConfig};

pub use adapters::ProcessEnvironment;
pub use serialization::{parse_options, parse_record};

/// Expands `config` against the process environment and writes every
/// resolved key into it.
///
/// Not safe to call while other threads read or write the process
/// environment.
pub fn expand_process_env(config: ParsedConfig, options: ExpandOptions) -> ParsedConfig {
    let mut env = ProcessEnvironment::new();
    Expander::new(&mut env, options).expand(config)
}

/// Strict variant of [`expand_process_env`].
///
/// # Errors
///
/// Returns an error, leaving the process environment untouched, if a key is
/// not identifier-like or a reference is cyclic or nested too deeply.
pub fn try_expand_process_env(
    config: ParsedConfig,
    options: ExpandOptions,
) -> ApplicationResult<ParsedConfig> {
    let mut env = ProcessEnvironment::new();
    Expander::new(&mut env, options).try_expand(config)
}

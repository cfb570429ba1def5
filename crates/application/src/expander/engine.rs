//! Expansion engine
//!
//! Resolves every value of a parsed config against the config itself and an
//! environment store, then writes the results through to the store.

use envexpand_domain::{
    ConfigMap, ExpandOptions, ParsedConfig, Reference, ResolvedValue, ValueSource,
};
use tracing::{debug, trace, warn};

use super::escape::EscapeRule;
use super::parser::parse_references;
use super::report::{ExpansionReport, Truncation, TruncationKind};
use crate::error::ApplicationResult;
use crate::ports::EnvironmentStore;

/// The expansion engine.
///
/// Borrows the environment store for its lifetime: reads from it while
/// resolving and writes every resolved key into it once all keys are done.
/// Keys never see each other's resolved values during a pass, only their raw
/// values through direct lookup.
///
/// Bound to the process environment, an expansion is not safe to run
/// concurrently with other code touching that environment.
pub struct Expander<'s, S: EnvironmentStore + ?Sized> {
    store: &'s mut S,
    options: ExpandOptions,
}

impl<'s, S: EnvironmentStore + ?Sized> Expander<'s, S> {
    /// Creates an expander over `store`.
    pub fn new(store: &'s mut S, options: ExpandOptions) -> Self {
        Self { store, options }
    }

    /// Creates an expander with default options.
    pub fn with_defaults(store: &'s mut S) -> Self {
        Self::new(store, ExpandOptions::default())
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &*self.store
    }

    /// Resolves every value in `config`, writes the results into the store
    /// and returns the same record.
    ///
    /// Never fails. Missing keys become empty strings, and cyclic or
    /// too-deeply nested references are cut short to empty strings.
    pub fn expand(&mut self, config: ParsedConfig) -> ParsedConfig {
        self.expand_with_report(config).0
    }

    /// Same as [`expand`](Self::expand), also returning what the pass did.
    pub fn expand_with_report(
        &mut self,
        mut config: ParsedConfig,
    ) -> (ParsedConfig, ExpansionReport) {
        let (resolved, report) = self.resolve_all(&config.parsed);
        self.write_through(&resolved);
        config.parsed = resolved;
        (config, report)
    }

    /// Strict expansion: rejects non-identifier keys and reports the first
    /// cyclic or too-deep reference as an error.
    ///
    /// # Errors
    ///
    /// Returns an error without touching the store if a key is invalid or
    /// any reference had to be cut short.
    pub fn try_expand(&mut self, mut config: ParsedConfig) -> ApplicationResult<ParsedConfig> {
        config.validate_keys()?;

        let (resolved, report) = self.resolve_all(&config.parsed);
        if let Some(truncation) = report.truncated.into_iter().next() {
            return Err(truncation.into());
        }

        self.write_through(&resolved);
        config.parsed = resolved;
        Ok(config)
    }

    /// Interpolates a single string against `config` and the store without
    /// writing anything.
    #[must_use]
    pub fn interpolate(&self, config: &ConfigMap, text: &str) -> String {
        let mut report = ExpansionReport::default();
        Resolution {
            config,
            store: &*self.store,
            options: &self.options,
            origin: "",
            stack: Vec::new(),
            report: &mut report,
        }
        .interpolate(text, 0)
    }

    fn resolve_all(&self, parsed: &ConfigMap) -> (ConfigMap, ExpansionReport) {
        let mut report = ExpansionReport::default();
        let mut resolved = ConfigMap::new();

        for (key, raw) in parsed {
            let selected = lookup(parsed, &*self.store, &self.options, key);
            let source = selected.as_ref().map(|(source, _)| *source);
            let value = selected.map_or_else(|| raw.clone(), |(_, value)| value);

            // Escapes are detected on the config text but applied to the selected value.
            let value = if let Some(rule) = EscapeRule::detect(raw) {
                debug!(key = %key, ?rule, "escaped dollar sign, skipping interpolation");
                report.escaped.push(key.clone());
                rule.apply(&value)
            } else {
                Resolution {
                    config: parsed,
                    store: &*self.store,
                    options: &self.options,
                    origin: key,
                    stack: vec![key.clone()],
                    report: &mut report,
                }
                .interpolate(&value, 0)
            };

            debug!(key = %key, ?source, "resolved config key");
            report.resolved.push(ResolvedValue {
                key: key.clone(),
                value: value.clone(),
                source,
            });
            resolved.insert(key.clone(), value);
        }

        (resolved, report)
    }

    fn write_through(&mut self, resolved: &ConfigMap) {
        for (key, value) in resolved {
            self.store.set(key, value);
        }
        debug!(count = resolved.len(), "wrote resolved keys to environment store");
    }
}

/// Expands `config` against `store` in one call.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envexpand_application::expand;
/// use envexpand_domain::{ExpandOptions, ParsedConfig};
///
/// let mut env: HashMap<String, String> = HashMap::new();
/// let config = ParsedConfig::from_pairs([("BASIC", "basic"), ("BASIC_EXPAND", "${BASIC}")]);
///
/// let config = expand(config, &mut env, ExpandOptions::default());
/// assert_eq!(config.get("BASIC_EXPAND"), Some("basic"));
/// assert_eq!(env.get("BASIC_EXPAND").map(String::as_str), Some("basic"));
/// ```
pub fn expand<S: EnvironmentStore + ?Sized>(
    config: ParsedConfig,
    store: &mut S,
    options: ExpandOptions,
) -> ParsedConfig {
    Expander::new(store, options).expand(config)
}

/// Looks `key` up in both sources in precedence order.
///
/// Empty values count as absent, so a set-but-empty variable falls through
/// to the other source.
fn lookup<S: EnvironmentStore + ?Sized>(
    config: &ConfigMap,
    store: &S,
    options: &ExpandOptions,
    key: &str,
) -> Option<(ValueSource, String)> {
    options.precedence().into_iter().find_map(|source| {
        let value = match source {
            ValueSource::Config => config.get(key).cloned(),
            ValueSource::Environment => store.get(key),
        };
        value.filter(|v| !v.is_empty()).map(|v| (source, v))
    })
}

/// State for expanding one top-level value.
struct Resolution<'a, S: ?Sized> {
    config: &'a ConfigMap,
    store: &'a S,
    options: &'a ExpandOptions,
    origin: &'a str,
    /// Keys currently being resolved, outermost first.
    stack: Vec<String>,
    report: &'a mut ExpansionReport,
}

impl<S: EnvironmentStore + ?Sized> Resolution<'_, S> {
    fn interpolate(&mut self, text: &str, depth: usize) -> String {
        let references = parse_references(text);
        if references.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;

        for reference in &references {
            result.push_str(&text[last_end..reference.span.start]);
            result.push_str(&self.resolve_reference(reference, depth));
            last_end = reference.span.end;
        }

        result.push_str(&text[last_end..]);
        result
    }

    fn resolve_reference(&mut self, reference: &Reference, depth: usize) -> String {
        if depth >= self.options.max_depth {
            let max_depth = self.options.max_depth;
            self.truncate(&reference.key, TruncationKind::Depth { max_depth });
            return String::new();
        }

        let variable = self.resolve_key(&reference.key, depth).unwrap_or_default();
        if !variable.is_empty() {
            return variable;
        }

        reference
            .default
            .as_deref()
            .map(|default| self.interpolate(default, depth + 1))
            .unwrap_or_default()
    }

    fn resolve_key(&mut self, key: &str, depth: usize) -> Option<String> {
        if self.stack.iter().any(|k| k == key) {
            let chain = self.stack.clone();
            self.truncate(key, TruncationKind::Cycle { chain });
            return None;
        }

        let Some((source, raw)) = lookup(self.config, self.store, self.options, key) else {
            trace!(key, "reference has no value in either source");
            self.report.note_unresolved(key);
            return None;
        };

        trace!(key, %source, depth, "following reference");
        self.stack.push(key.to_string());
        let value = self.interpolate(&raw, depth + 1);
        self.stack.pop();
        Some(value)
    }

    fn truncate(&mut self, key: &str, kind: TruncationKind) {
        warn!(origin = self.origin, key, ?kind, "reference cut short, using empty string");
        self.report.truncated.push(Truncation {
            origin: self.origin.to_string(),
            key: key.to_string(),
            kind,
        });
    }
}

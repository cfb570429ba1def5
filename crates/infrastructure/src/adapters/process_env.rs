//! Process environment adapter

use envexpand_application::ports::EnvironmentStore;
use tracing::warn;

/// Environment store backed by the process environment.
///
/// Writing the process environment is only sound while no other thread
/// reads or writes it. Run expansions bound to this adapter during start-up,
/// before spawning threads; no locking is done here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new process environment adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentStore for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        if !is_settable_key(key) {
            return None;
        }
        // Non-UTF-8 values read as absent.
        std::env::var(key).ok()
    }

    #[allow(unsafe_code)]
    fn set(&mut self, key: &str, value: &str) {
        if !is_settable_key(key) || value.contains('\0') {
            warn!(key, "process environment cannot hold this entry, skipping");
            return;
        }
        // SAFETY: see the type docs; callers keep other threads away from
        // the environment while expanding.
        unsafe { std::env::set_var(key, value) }
    }
}

/// Keys the OS accepts: non-empty, no `=` and no NUL.
fn is_settable_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

//! Environment store port

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Port for the key-value store that references resolve against and that
/// expanded values are written back into.
///
/// The production adapter binds this to the process environment; tests
/// inject a plain map so resolution stays deterministic.
pub trait EnvironmentStore {
    /// Returns the value stored for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

impl<H: BuildHasher> EnvironmentStore for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

impl EnvironmentStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<S: EnvironmentStore>(store: &mut S) {
        assert_eq!(store.get("KEY"), None);
        store.set("KEY", "first");
        store.set("KEY", "second");
        assert_eq!(store.get("KEY"), Some("second".to_string()));
    }

    #[test]
    fn test_hash_map_store() {
        round_trip(&mut HashMap::new());
    }

    #[test]
    fn test_btree_map_store() {
        round_trip(&mut BTreeMap::new());
    }
}

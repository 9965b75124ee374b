//! Configuration registry port.
//!
//! The build orchestrator owns a registry of detection results that later
//! build steps look up by variable name. The probe writes into it exactly
//! once per successful probe.
//!
//! # Scoping
//!
//! `store` is scoped to the caller's variable name. `define_global` is the one
//! exception: it makes a define visible to every subsequent build step, and
//! only the package-metadata strategy uses it.

use std::collections::{BTreeMap, BTreeSet};

use crate::probe::ProbeResult;

/// Port for the orchestrator's configuration registry.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigRegistry {
    /// Record a successful probe result under `variable_name`.
    fn store(&mut self, variable_name: &str, result: &ProbeResult);

    /// Register `define` process-wide.
    fn define_global(&mut self, define: &str);
}

/// Registry kept in memory, used by the CLI and in tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    entries: BTreeMap<String, ProbeResult>,
    globals: BTreeSet<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable_name: &str) -> Option<&ProbeResult> {
        self.entries.get(variable_name)
    }

    pub fn is_global(&self, define: &str) -> bool {
        self.globals.contains(define)
    }

    pub fn globals(&self) -> impl Iterator<Item = &str> {
        self.globals.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigRegistry for InMemoryRegistry {
    fn store(&mut self, variable_name: &str, result: &ProbeResult) {
        self.entries.insert(variable_name.to_string(), result.clone());
    }

    fn define_global(&mut self, define: &str) {
        self.globals.insert(define.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{BuildFlags, ProbeSource};

    #[test]
    fn test_store_and_get() {
        let mut registry = InMemoryRegistry::new();
        let result = ProbeResult::found(
            "HAVE_LEVELDB".into(),
            ProbeSource::SystemDefault,
            BuildFlags::for_link("leveldb", None, None),
        );

        registry.store("LEVELDB", &result);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("LEVELDB"), Some(&result));
        assert!(registry.get("SNAPPY").is_none());
        assert!(!registry.is_global("HAVE_LEVELDB"));
    }

    #[test]
    fn test_define_global() {
        let mut registry = InMemoryRegistry::new();
        registry.define_global("HAVE_LEVELDB");

        assert!(registry.is_empty());
        assert!(registry.is_global("HAVE_LEVELDB"));
        assert_eq!(registry.globals().collect::<Vec<_>>(), vec!["HAVE_LEVELDB"]);
    }
}

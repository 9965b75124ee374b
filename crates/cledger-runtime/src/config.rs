//! Probe configuration resolved from the environment.
//!
//! | Variable               | Meaning                                 | Default   |
//! |------------------------|-----------------------------------------|-----------|
//! | `CLEDGER_LEVELDB_DIR`  | installation root (`--with-leveldb`)    | unset     |
//! | `CLEDGER_PROBE_LIBRARY`| library name for linker and pkg-config  | `leveldb` |
//! | `CLEDGER_PROBE_HEADER` | header included by the link check       | unset     |
//! | `CXX`                  | C++ compiler driver                     | `c++`     |
//! | `CXXFLAGS`             | extra compiler flags (whitespace split) | empty     |

use std::env;
use std::path::PathBuf;

use cledger_core::probe::{DEFAULT_LIBRARY, LibrarySpec};
use cledger_core::services::LibraryProbe;

use crate::system::{CxxCompilerCheck, PkgConfigLookup};

pub const ENV_LEVELDB_DIR: &str = "CLEDGER_LEVELDB_DIR";
pub const ENV_PROBE_LIBRARY: &str = "CLEDGER_PROBE_LIBRARY";
pub const ENV_PROBE_HEADER: &str = "CLEDGER_PROBE_HEADER";
pub const ENV_CXX: &str = "CXX";
pub const ENV_CXXFLAGS: &str = "CXXFLAGS";

/// Default compiler driver when `CXX` is unset.
pub const DEFAULT_CXX: &str = "c++";

/// Everything needed to build a [`LibraryProbe`] wired to system adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub library: LibrarySpec,
    /// Installation root from the environment; an explicit argument wins.
    pub root: Option<PathBuf>,
    pub compiler: String,
    pub compiler_flags: Vec<String>,
}

impl ProbeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let name = get(ENV_PROBE_LIBRARY).unwrap_or_else(|| DEFAULT_LIBRARY.to_string());
        let mut library = LibrarySpec::new(name);
        library.header = get(ENV_PROBE_HEADER);

        Self {
            library,
            root: get(ENV_LEVELDB_DIR).map(PathBuf::from),
            compiler: get(ENV_CXX).unwrap_or_else(|| DEFAULT_CXX.to_string()),
            compiler_flags: get(ENV_CXXFLAGS)
                .map(|flags| flags.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// Compiler check adapter for this configuration.
    pub fn compiler_check(&self) -> CxxCompilerCheck {
        CxxCompilerCheck::new(self.compiler.clone()).with_flags(self.compiler_flags.clone())
    }

    /// A probe using the system compiler and pkg-config.
    pub fn library_probe(&self) -> LibraryProbe {
        LibraryProbe::new(
            self.library.clone(),
            Box::new(self.compiler_check()),
            Box::new(PkgConfigLookup::new()),
        )
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.library, LibrarySpec::new("leveldb"));
        assert_eq!(config.compiler, "c++");
        assert!(config.compiler_flags.is_empty());
        assert!(config.root.is_none());
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ProbeConfig::from_lookup(lookup(&[
            (ENV_LEVELDB_DIR, "/opt/leveldb"),
            (ENV_PROBE_LIBRARY, "rocksdb"),
            (ENV_PROBE_HEADER, "rocksdb/db.h"),
            (ENV_CXX, "clang++"),
            (ENV_CXXFLAGS, "  -O0   -std=c++17 "),
        ]));

        assert_eq!(config.root, Some(PathBuf::from("/opt/leveldb")));
        assert_eq!(config.library.name, "rocksdb");
        assert_eq!(config.library.header.as_deref(), Some("rocksdb/db.h"));
        assert_eq!(config.compiler, "clang++");
        assert_eq!(config.compiler_flags, vec!["-O0", "-std=c++17"]);
        assert_eq!(config.compiler_check().compiler(), "clang++");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ProbeConfig::from_lookup(lookup(&[(ENV_CXX, "  "), (ENV_LEVELDB_DIR, "")]));
        assert_eq!(config.compiler, "c++");
        assert!(config.root.is_none());
    }
}

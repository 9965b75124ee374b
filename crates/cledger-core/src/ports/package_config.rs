//! Package metadata port.
//!
//! Abstracts a system package-config registry (pkg-config on Unix) that can
//! report compiler and linker flags for an installed library.

use std::path::PathBuf;
use thiserror::Error;

use crate::probe::BuildFlags;

/// Flags reported by the registry for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFlags {
    pub version: Option<String>,
    pub include_paths: Vec<PathBuf>,
    pub link_paths: Vec<PathBuf>,
    pub libs: Vec<String>,
    pub defines: Vec<(String, Option<String>)>,
}

impl From<PackageFlags> for BuildFlags {
    fn from(flags: PackageFlags) -> Self {
        Self {
            include_paths: flags.include_paths,
            link_paths: flags.link_paths,
            libs: flags.libs,
            defines: flags.defines,
        }
    }
}

/// Errors from a package metadata lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The registry has no entry for the package.
    #[error("package {0} not registered")]
    NotRegistered(String),

    /// The registry tool itself is missing or failed.
    #[error("package registry unavailable: {0}")]
    Unavailable(String),
}

/// Port for package metadata lookups.
#[cfg_attr(test, mockall::automock)]
pub trait PackageConfigPort {
    /// Ask the registry for cflags and libs of `package`.
    fn lookup(&self, package: &str) -> Result<PackageFlags, LookupError>;
}

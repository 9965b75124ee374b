//! Package metadata lookups through pkg-config.

use cledger_core::ports::{LookupError, PackageConfigPort, PackageFlags};
use tracing::debug;

/// `PackageConfigPort` backed by the system `pkg-config`.
///
/// Never prints Cargo directives itself; the registry adapter decides what
/// reaches the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct PkgConfigLookup;

impl PkgConfigLookup {
    pub const fn new() -> Self {
        Self
    }
}

impl PackageConfigPort for PkgConfigLookup {
    fn lookup(&self, package: &str) -> Result<PackageFlags, LookupError> {
        let library = pkg_config::Config::new()
            .cargo_metadata(false)
            .env_metadata(false)
            .print_system_libs(false)
            .probe(package)
            .map_err(|e| classify(package, &e))?;

        debug!(
            package,
            version = %library.version,
            libs = ?library.libs,
            "pkg-config lookup succeeded"
        );

        let mut defines: Vec<(String, Option<String>)> = library.defines.into_iter().collect();
        defines.sort();

        Ok(PackageFlags {
            version: Some(library.version).filter(|v| !v.is_empty()),
            include_paths: library.include_paths,
            link_paths: library.link_paths,
            libs: library.libs,
            defines,
        })
    }
}

fn classify(package: &str, err: &pkg_config::Error) -> LookupError {
    match err {
        pkg_config::Error::Failure { .. } | pkg_config::Error::ProbeFailure { .. } => {
            debug!(package, error = %err, "pkg-config has no entry");
            LookupError::NotRegistered(package.to_string())
        }
        _ => LookupError::Unavailable(err.to_string()),
    }
}

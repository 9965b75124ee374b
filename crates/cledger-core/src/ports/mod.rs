//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the build
//! environment. They contain no implementation details and use only domain
//! types.
//!
//! # Design Rules
//!
//! - No process or filesystem details in any signature
//! - Synchronous and blocking; probing is a one-shot configure step
//! - Adapters live in cledger-runtime

pub mod compiler_check;
pub mod config_registry;
pub mod package_config;

pub use compiler_check::{CheckFailure, CompilerCheckPort, LinkCheck};
pub use config_registry::{ConfigRegistry, InMemoryRegistry};
pub use package_config::{LookupError, PackageConfigPort, PackageFlags};

#[cfg(test)]
pub use compiler_check::MockCompilerCheckPort;
#[cfg(test)]
pub use config_registry::MockConfigRegistry;
#[cfg(test)]
pub use package_config::MockPackageConfigPort;

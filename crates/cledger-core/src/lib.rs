//! Core domain types, ports and services for cledger build tooling.
//!
//! Two independent pieces live here:
//!
//! - [`LibraryProbe`] detects a native library (LevelDB by default) and
//!   records its build flags in a [`ConfigRegistry`].
//! - [`client_config::inject`] writes an anchor certificate into a client
//!   config file.
//!
//! Adapters for the ports (system compiler, pkg-config, Cargo directives)
//! live in `cledger-runtime`.

pub mod client_config;
pub mod ports;
pub mod probe;
pub mod services;

// Re-export commonly used types for convenience
pub use client_config::{ClientConfigDocument, InjectError, InjectReport, inject};
pub use ports::{
    CheckFailure, CompilerCheckPort, ConfigRegistry, InMemoryRegistry, LinkCheck, LookupError,
    PackageConfigPort, PackageFlags,
};
pub use probe::{
    BuildFlags, DEFAULT_LIBRARY, DEFAULT_VARIABLE_NAME, LibrarySpec, ProbeError, ProbeRequest,
    ProbeResult, ProbeSource, SearchLocation, define_name,
};
pub use services::{LibraryProbe, Strategy};

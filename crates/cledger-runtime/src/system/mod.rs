//! System adapters for the probe ports.
//!
//! - `compiler`: `CompilerCheckPort` via an external C++ compiler driver
//! - `pkgconfig`: `PackageConfigPort` via pkg-config
//! - `commands`: version strings for diagnostics

mod commands;
mod compiler;
mod pkgconfig;

pub use commands::{get_command_version, get_compiler_version, get_pkgconfig_version};
pub use compiler::{CxxCompilerCheck, test_fragment};
pub use pkgconfig::PkgConfigLookup;

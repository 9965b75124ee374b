//! System adapters for cledger build tooling.
//!
//! Implements the `cledger-core` ports against the real build environment:
//!
//! - [`system::CxxCompilerCheck`]: compile-and-link checks via `CXX`
//! - [`system::PkgConfigLookup`]: package metadata via pkg-config
//! - [`registry::CargoDirectives`]: results as Cargo build-script directives
//! - [`build::check_leveldb`]: one-call entry point for a `build.rs`

pub mod build;
pub mod config;
pub mod registry;
pub mod system;

pub use config::ProbeConfig;
pub use registry::CargoDirectives;
pub use system::{CxxCompilerCheck, PkgConfigLookup};

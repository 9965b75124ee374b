//! Entry point for Cargo build scripts.
//!
//! ```ignore
//! // build.rs of a crate that links LevelDB
//! fn main() {
//!     cledger_runtime::build::check_leveldb(None, true).unwrap();
//! }
//! ```
//!
//! The crate then sees `cfg(have_leveldb)`, and crates depending on it (with
//! `links = "leveldb"`) see `DEP_LEVELDB_HAVE_LEVELDB=1` when pkg-config
//! provided the flags.

use std::io;
use std::path::Path;

use cledger_core::probe::{ProbeError, ProbeRequest, ProbeResult};
use thiserror::Error;

use crate::config::{ENV_CXX, ENV_CXXFLAGS, ENV_LEVELDB_DIR, ProbeConfig};
use crate::registry::CargoDirectives;

/// Errors from running the probe inside a build script.
#[derive(Debug, Error)]
pub enum BuildScriptError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("failed to write cargo directives: {0}")]
    Io(#[from] io::Error),
}

/// Probe for LevelDB and print Cargo directives to stdout.
///
/// `root` overrides `CLEDGER_LEVELDB_DIR`. With `mandatory`, a missing
/// library is an error; otherwise the returned result has `found = false`.
pub fn check_leveldb(
    root: Option<&Path>,
    mandatory: bool,
) -> Result<ProbeResult, BuildScriptError> {
    let config = ProbeConfig::from_env();
    let stdout = io::stdout();
    let mut registry = CargoDirectives::new(stdout.lock());
    let result = run(&config, root, mandatory, &mut registry)?;
    let mut out = registry.finish()?;
    rerun_directives(&mut out)?;
    Ok(result)
}

/// Probe with an explicit configuration into any Cargo directive sink.
pub fn run<W: io::Write>(
    config: &ProbeConfig,
    root: Option<&Path>,
    mandatory: bool,
    registry: &mut CargoDirectives<W>,
) -> Result<ProbeResult, ProbeError> {
    let request = ProbeRequest::default()
        .with_root_opt(root.map(Path::to_path_buf).or_else(|| config.root.clone()))
        .with_mandatory(mandatory);
    config.library_probe().probe(&request, registry)
}

fn rerun_directives(out: &mut impl io::Write) -> io::Result<()> {
    for var in [ENV_LEVELDB_DIR, ENV_CXX, ENV_CXXFLAGS, "PKG_CONFIG_PATH"] {
        writeln!(out, "cargo:rerun-if-env-changed={var}")?;
    }
    Ok(())
}

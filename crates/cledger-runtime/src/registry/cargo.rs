//! Configuration registry that speaks Cargo build-script directives.
//!
//! Cargo is the build orchestrator when the probe runs from a `build.rs`.
//! Scoped results become link/cfg directives for the crate being built;
//! the global define becomes `links` metadata, which Cargo forwards to every
//! dependent crate as `DEP_<LINKS>_<KEY>`.

use std::env;
use std::io::{self, Write};

use cledger_core::ports::ConfigRegistry;
use cledger_core::probe::ProbeResult;

/// Writes `cargo:` directives for each registry call to `out`.
///
/// The registry port cannot fail, so the first write error is kept and
/// reported by [`CargoDirectives::finish`].
pub struct CargoDirectives<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> CargoDirectives<W> {
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, directive: &str) {
        if self.error.is_none()
            && let Err(e) = writeln!(self.out, "cargo:{directive}")
        {
            self.error = Some(e);
        }
    }
}

/// `HAVE_LEVELDB` -> `have_leveldb`
pub fn cfg_name(define: &str) -> String {
    define.to_lowercase()
}

impl<W: Write> ConfigRegistry for CargoDirectives<W> {
    fn store(&mut self, _variable_name: &str, result: &ProbeResult) {
        for dir in &result.flags.link_paths {
            self.emit(&format!("rustc-link-search=native={}", dir.display()));
        }
        for lib in &result.flags.libs {
            self.emit(&format!("rustc-link-lib={lib}"));
        }
        if !result.flags.include_paths.is_empty()
            && let Ok(joined) = env::join_paths(&result.flags.include_paths)
        {
            self.emit(&format!("include={}", joined.to_string_lossy()));
        }
        // Dependents read these as DEP_<LINKS>_DEFINE_<NAME>
        for (name, value) in &result.flags.defines {
            let value = value.as_deref().unwrap_or("1");
            self.emit(&format!("define_{}={value}", cfg_name(name)));
        }

        let cfg = cfg_name(&result.define_flag);
        self.emit(&format!("rustc-check-cfg=cfg({cfg})"));
        self.emit(&format!("rustc-cfg={cfg}"));
    }

    fn define_global(&mut self, define: &str) {
        let key = cfg_name(define);
        self.emit(&format!("{key}=1"));
    }
}

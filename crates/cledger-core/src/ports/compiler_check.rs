//! Compiler check port.
//!
//! A compiler check tries to compile and link a small program against a named
//! library. The probe service uses it for the explicit-root and system-default
//! strategies. Implementations live in adapters (e.g., cledger-runtime).

use std::path::PathBuf;
use thiserror::Error;

/// One compile-and-link attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck {
    /// Library to link (`-l<lib>`).
    pub lib: String,
    /// Header to include in the test fragment, if any.
    pub header: Option<String>,
    /// Extra include search paths (`-I`).
    pub includes: Vec<PathBuf>,
    /// Extra library search paths (`-L`).
    pub libpaths: Vec<PathBuf>,
}

impl LinkCheck {
    /// A check that relies only on the compiler's default search paths.
    pub fn new(lib: impl Into<String>) -> Self {
        Self {
            lib: lib.into(),
            header: None,
            includes: Vec::new(),
            libpaths: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.includes.push(dir.into());
        self
    }

    #[must_use]
    pub fn with_libpath(mut self, dir: impl Into<PathBuf>) -> Self {
        self.libpaths.push(dir.into());
        self
    }
}

/// Why a compiler check did not succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckFailure {
    /// The compiler could not be started at all.
    #[error("failed to run compiler {compiler}: {reason}")]
    CompilerUnavailable { compiler: String, reason: String },

    /// The compiler ran and rejected the fragment.
    #[error("compile/link check failed: {0}")]
    Rejected(String),

    /// Scratch files for the check could not be prepared.
    #[error("failed to prepare check: {0}")]
    Setup(String),
}

/// Port for compile-and-link checks against a native library.
#[cfg_attr(test, mockall::automock)]
pub trait CompilerCheckPort {
    /// Compile and link a test program against `check.lib`.
    fn check_library(&self, check: &LinkCheck) -> Result<(), CheckFailure>;
}

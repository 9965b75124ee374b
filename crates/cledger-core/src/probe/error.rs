//! Probe error types.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where a failed probe looked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLocation {
    /// The installation root given by the caller. A root that does not exist
    /// at all reports the same way.
    Root(PathBuf),
    /// Package registry followed by the compiler's default search paths.
    SystemPaths,
}

impl fmt::Display for SearchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root(root) => write!(f, "at specified root {}", root.display()),
            Self::SystemPaths => write!(f, "in package registry or default search paths"),
        }
    }
}

/// Errors surfaced by a mandatory library probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No strategy detected the library.
    #[error("{library} library not found {location}: {reason}")]
    LibraryNotFound {
        library: String,
        location: SearchLocation,
        /// Failure message of the last check that ran.
        reason: String,
    },
}

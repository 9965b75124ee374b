//! CLI-specific error types and mappings.
//!
//! Maps domain errors to exit codes and user-facing messages.

use cledger_core::{InjectError, ProbeError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A mandatory library probe found nothing.
    #[error("{0}")]
    LibraryNotFound(String),

    /// An input file is missing or unreadable.
    #[error("{0}")]
    NoInput(String),

    /// An input file has the wrong content.
    #[error("{0}")]
    InvalidData(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidData(_) => 65,     // EX_DATAERR
            Self::NoInput(_) => 66,         // EX_NOINPUT
            Self::LibraryNotFound(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,              // EX_IOERR
        }
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        Self::LibraryNotFound(err.to_string())
    }
}

impl From<InjectError> for CliError {
    fn from(err: InjectError) -> Self {
        match err {
            InjectError::FileNotFound(_) | InjectError::FileUnreadable { .. } => {
                Self::NoInput(err.to_string())
            }
            InjectError::InvalidJson { .. } | InjectError::MissingField { .. } => {
                Self::InvalidData(err.to_string())
            }
            InjectError::WriteFailed { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

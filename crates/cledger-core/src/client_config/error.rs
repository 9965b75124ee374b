//! Client config injection errors.

use std::path::PathBuf;
use thiserror::Error;

/// A required field of the client config document is absent.
///
/// The field is named by its JSON path, e.g. `ca-list[0].certificate`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing field {0}")]
pub struct MissingField(pub &'static str);

/// Errors that can occur while injecting a certificate into a client config.
///
/// Every variant except [`InjectError::WriteFailed`] is raised before the
/// config file is touched.
#[derive(Debug, Error)]
pub enum InjectError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// An input file exists but could not be read as UTF-8 text.
    #[error("Failed to read {path}: {reason}")]
    FileUnreadable { path: PathBuf, reason: String },

    /// The config file is not valid JSON.
    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson { path: PathBuf, reason: String },

    /// The config document lacks `ca-list[0].certificate`.
    #[error("{path}: {field}")]
    MissingField { path: PathBuf, field: MissingField },

    /// Writing the updated config failed.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

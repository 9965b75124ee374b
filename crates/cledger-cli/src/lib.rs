//! Command-line front end for cledger build tooling.

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, InjectCertArgs, OutputFormat, ProbeArgs};
pub use error::CliError;
pub use parser::Cli;


//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Build tooling for the certificate ledger: detect LevelDB, prepare test configs.
#[derive(Parser)]
#[command(name = "cledger")]
#[command(about = "Probe native libraries and patch client configs for cert-ledger builds")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

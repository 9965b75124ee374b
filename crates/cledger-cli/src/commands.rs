//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect the LevelDB library and report its build flags
    Probe(ProbeArgs),

    /// Write an anchor certificate into ca-list[0].certificate of a client config
    InjectCert(InjectCertArgs),
}

/// Arguments for `probe`.
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Directory where LevelDB is installed, e.g., /usr/local
    #[arg(long = "with-leveldb", value_name = "DIR", env = "CLEDGER_LEVELDB_DIR")]
    pub with_leveldb: Option<PathBuf>,

    /// Report a missing library instead of failing
    #[arg(long)]
    pub optional: bool,

    /// Registry variable the result is stored under (defines HAVE_<NAME>)
    #[arg(long = "uselib-store", value_name = "NAME", default_value = "LEVELDB")]
    pub uselib_store: String,

    /// Library name passed to the linker and pkg-config
    #[arg(long, env = "CLEDGER_PROBE_LIBRARY")]
    pub library: Option<String>,

    /// Header the link check must also find, e.g., leveldb/db.h
    #[arg(long, env = "CLEDGER_PROBE_HEADER")]
    pub header: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How `probe` reports its result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The probe result as JSON
    Json,
    /// Cargo build-script directives
    Cargo,
}

/// Arguments for `inject-cert`.
#[derive(Args, Debug, Clone)]
pub struct InjectCertArgs {
    /// Certificate file whose text is injected
    #[arg(long, value_name = "PATH", env = "CLEDGER_ANCHOR_CERT")]
    pub cert: PathBuf,

    /// Client config JSON file to rewrite in place
    #[arg(long, value_name = "PATH", env = "CLEDGER_CLIENT_CONF")]
    pub config: PathBuf,

    /// Print the certificate value that was replaced
    #[arg(long)]
    pub show_previous: bool,
}

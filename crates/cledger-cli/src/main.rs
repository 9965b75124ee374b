//! CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use cledger_cli::{Cli, CliError, Commands, handlers, logging};

fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Probe(args) => {
            handlers::probe::execute(&args, &mut out)?;
        }
        Commands::InjectCert(args) => {
            handlers::inject_cert::execute(&args, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

//! `inject-cert` command handler.

use std::io::Write;

use anyhow::{Context, Result};
use cledger_core::{InjectReport, inject};
use serde_json::Value;

use crate::commands::InjectCertArgs;
use crate::error::CliError;

/// Inject the certificate and optionally print the value it replaced.
pub fn execute(args: &InjectCertArgs, out: &mut dyn Write) -> Result<InjectReport> {
    let report = inject(&args.cert, &args.config)
        .map_err(CliError::from)
        .with_context(|| {
            format!(
                "failed to inject {} into {}",
                args.cert.display(),
                args.config.display()
            )
        })?;

    if args.show_previous {
        match &report.previous_certificate {
            Value::String(text) => writeln!(out, "{text}"),
            other => writeln!(out, "{other}"),
        }
        .map_err(CliError::from)?;
    }

    Ok(report)
}

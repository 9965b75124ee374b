//! `probe` command handler.

use std::io::Write;

use anyhow::{Context, Result};
use cledger_core::{InMemoryRegistry, LibraryProbe, ProbeRequest, ProbeResult};
use cledger_runtime::system::{get_compiler_version, get_pkgconfig_version};
use cledger_runtime::{CargoDirectives, ProbeConfig};
use tracing::debug;

use crate::commands::{OutputFormat, ProbeArgs};
use crate::error::CliError;

/// Execute the probe command with adapters configured from the environment.
pub fn execute(args: &ProbeArgs, out: &mut dyn Write) -> Result<ProbeResult> {
    let mut config = ProbeConfig::from_env();
    if let Some(library) = &args.library {
        config.library.name.clone_from(library);
    }
    if args.header.is_some() {
        config.library.header.clone_from(&args.header);
    }

    let request = ProbeRequest::new(args.uselib_store.as_str())
        .with_root_opt(args.with_leveldb.clone().or_else(|| config.root.clone()))
        .with_mandatory(!args.optional);

    debug!(
        compiler = %config.compiler,
        compiler_version = ?get_compiler_version(&config.compiler),
        pkg_config_version = ?get_pkgconfig_version(),
        "Probe toolchain"
    );

    execute_with(&config.library_probe(), &request, args.format, out)
}

/// Run `probe` and render the result in `format`.
pub fn execute_with(
    probe: &LibraryProbe,
    request: &ProbeRequest,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<ProbeResult> {
    if format == OutputFormat::Cargo {
        let mut registry = CargoDirectives::new(&mut *out);
        let result = probe.probe(request, &mut registry).map_err(CliError::from)?;
        registry
            .finish()
            .map_err(CliError::from)
            .context("failed to write cargo directives")?;
        return Ok(result);
    }

    let mut registry = InMemoryRegistry::new();
    let result = probe.probe(request, &mut registry).map_err(CliError::from)?;

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result).context("failed to encode result")?;
            writeln!(out).map_err(CliError::from)?;
        }
        OutputFormat::Text | OutputFormat::Cargo => {
            render_text(&probe.library().name, &result, &registry, out)
                .map_err(CliError::from)?;
        }
    }
    Ok(result)
}

fn render_text(
    library: &str,
    result: &ProbeResult,
    registry: &InMemoryRegistry,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let Some(source) = result.source else {
        writeln!(out, "Checking for {library} library: not found")?;
        return writeln!(out, "{} = 0", result.define_flag);
    };

    writeln!(out, "Checking for {library} library: yes ({source})")?;
    let scope = if registry.is_global(&result.define_flag) {
        "global"
    } else {
        "scoped"
    };
    writeln!(out, "{} = 1 ({scope})", result.define_flag)?;
    if let Some(include) = &result.include_path {
        writeln!(out, "include path: {include}")?;
    }
    if let Some(lib) = &result.lib_path {
        writeln!(out, "lib path: {lib}")?;
    }
    if !result.flags.libs.is_empty() {
        writeln!(out, "libs: {}", result.flags.libs.join(" "))?;
    }
    Ok(())
}

//! Compile-and-link checks through the system C++ compiler.
//!
//! Writes a tiny test program into a scratch directory and asks a gcc/clang
//! style driver to build it against the requested library. Success means the
//! library (and optional header) can be found with the given search paths.

use std::fs;
use std::path::Path;
use std::process::Command;

use cledger_core::ports::{CheckFailure, CompilerCheckPort, LinkCheck};
use tracing::debug;

/// Compiler check backed by an external C++ compiler driver.
#[derive(Debug, Clone)]
pub struct CxxCompilerCheck {
    compiler: String,
    flags: Vec<String>,
}

impl CxxCompilerCheck {
    pub fn new(compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            flags: Vec::new(),
        }
    }

    /// Extra flags passed before the source file (e.g. from `CXXFLAGS`).
    #[must_use]
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.flags = flags;
        self
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    fn command(&self, check: &LinkCheck, source: &Path, binary: &Path) -> Command {
        let mut cmd = Command::new(&self.compiler);
        cmd.args(&self.flags);
        for dir in &check.includes {
            cmd.arg("-I").arg(dir);
        }
        cmd.arg(source).arg("-o").arg(binary);
        for dir in &check.libpaths {
            cmd.arg("-L").arg(dir);
        }
        cmd.arg(format!("-l{}", check.lib));
        cmd
    }
}

impl CompilerCheckPort for CxxCompilerCheck {
    fn check_library(&self, check: &LinkCheck) -> Result<(), CheckFailure> {
        let scratch = tempfile::Builder::new()
            .prefix("cledger-check")
            .tempdir()
            .map_err(|e| CheckFailure::Setup(e.to_string()))?;
        let source = scratch.path().join("test.cpp");
        let binary = scratch.path().join("testprog");
        fs::write(&source, test_fragment(check.header.as_deref()))
            .map_err(|e| CheckFailure::Setup(e.to_string()))?;

        let mut cmd = self.command(check, &source, &binary);
        debug!(command = ?cmd, "Running link check");

        let output = cmd
            .output()
            .map_err(|e| CheckFailure::CompilerUnavailable {
                compiler: self.compiler.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(status = ?output.status, %stderr, "Link check rejected");
        Err(CheckFailure::Rejected(summarize(&stderr, output.status.code())))
    }
}

/// The program compiled by a link check.
pub fn test_fragment(header: Option<&str>) -> String {
    let include = header.map_or_else(String::new, |h| format!("#include <{h}>\n"));
    format!(
        "{include}int main(int argc, char **argv) {{\n\t(void)argc; (void)argv;\n\treturn 0;\n}}\n"
    )
}

/// Pick the most useful stderr line: a missing header or library if the
/// driver reported one, otherwise the last non-empty line.
fn summarize(stderr: &str, code: Option<i32>) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .iter()
        .find(|line| line.contains("cannot find") || line.contains("fatal error"))
        .or_else(|| lines.last())
        .map_or_else(
            || match code {
                Some(code) => format!("compiler exited with status {code}"),
                None => "compiler terminated by signal".to_string(),
            },
            |line| (*line).to_string(),
        )
}

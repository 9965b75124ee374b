//! Generic command existence and version extraction.
//!
//! Used to report which compiler and registry tool a probe ran with.

use std::process::Command;

/// Get the version line of a command by running it with `version_flag`.
pub fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Some tools print their version to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines().next().map(|s| s.trim().to_string())
}

/// Get the version of a C++ compiler driver.
pub fn get_compiler_version(compiler: &str) -> Option<String> {
    let output = get_command_version(compiler, "--version")?;
    parse_compiler_version(&output)
}

/// Get pkg-config version.
pub fn get_pkgconfig_version() -> Option<String> {
    let output = get_command_version("pkg-config", "--version")?;
    Some(output.trim().to_string())
}

/// Extract a version from a compiler's first `--version` line.
///
/// "g++ (Ubuntu 13.2.0-4ubuntu3) 13.2.0" -> "13.2.0"
/// "Apple clang version 15.0.0 (clang-1500.1.0.2.5)" -> "15.0.0"
fn parse_compiler_version(line: &str) -> Option<String> {
    if let Some(rest) = line.split("clang version").nth(1) {
        return rest.split_whitespace().next().map(str::to_string);
    }

    line.split_whitespace()
        .rev()
        .find(|word| word.starts_with(|c: char| c.is_ascii_digit()) && word.contains('.'))
        .map(str::to_string)
}

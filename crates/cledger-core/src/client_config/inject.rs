//! Certificate injection into a client config file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::document::ClientConfigDocument;
use super::error::InjectError;

/// Summary of a completed injection.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectReport {
    /// Value of `ca-list[0].certificate` before it was overwritten.
    pub previous_certificate: Value,
    pub bytes_written: usize,
}

/// Replace `ca-list[0].certificate` in `config_path` with the text of `cert_path`.
///
/// The certificate is treated as an opaque blob. The config is rewritten with
/// 2-space indentation and its original key order; running this twice with
/// the same certificate yields byte-identical files.
///
/// All validation happens before the config file is touched. The new content
/// is written to a temporary file next to the config and renamed over it, so
/// a failure never leaves a truncated config behind.
pub fn inject(cert_path: &Path, config_path: &Path) -> Result<InjectReport, InjectError> {
    let certificate = read_text(cert_path)?;
    let text = read_text(config_path)?;

    let mut document =
        ClientConfigDocument::parse(&text).map_err(|e| InjectError::InvalidJson {
            path: config_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let previous_certificate =
        document
            .set_certificate(&certificate)
            .map_err(|field| InjectError::MissingField {
                path: config_path.to_path_buf(),
                field,
            })?;
    debug!(previous = %previous_certificate, "Replacing ca-list[0].certificate");

    let rendered = document
        .to_pretty_string()
        .map_err(|e| write_failed(config_path, &e))?;
    replace_file(config_path, rendered.as_bytes())?;

    info!(
        cert = %cert_path.display(),
        config = %config_path.display(),
        bytes = rendered.len(),
        "Injected certificate into client config"
    );

    Ok(InjectReport {
        previous_certificate,
        bytes_written: rendered.len(),
    })
}

fn read_text(path: &Path) -> Result<String, InjectError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InjectError::FileNotFound(path.to_path_buf()),
        _ => InjectError::FileUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })
}

/// Atomically replace the contents of `path`.
///
/// A symlinked config is resolved first so the link target is rewritten and
/// the link itself stays in place.
fn replace_file(path: &Path, contents: &[u8]) -> Result<(), InjectError> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| write_failed(path, &e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| write_failed(path, &e))?;

    // Keep the original file mode; the temp file is created 0600.
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| write_failed(path, &e))?;
    }

    tmp.persist(&target).map_err(|e| write_failed(path, &e.error))?;
    Ok(())
}

fn write_failed(path: &Path, err: &dyn std::fmt::Display) -> InjectError {
    InjectError::WriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CERT: &str = "-----BEGIN CERTIFICATE-----\nABC\n-----END CERTIFICATE-----\n";

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_inject_concrete_scenario() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let config = write(
            dir.path(),
            "client.conf",
            r#"{"ca-list": [{"certificate": "OLD"}]}"#,
        );

        let report = inject(&cert, &config).unwrap();

        let expected = "{\n  \"ca-list\": [\n    {\n      \"certificate\": \"-----BEGIN CERTIFICATE-----\\nABC\\n-----END CERTIFICATE-----\\n\"\n    }\n  ]\n}";
        assert_eq!(fs::read_to_string(&config).unwrap(), expected);
        assert_eq!(report.previous_certificate, Value::String("OLD".into()));
        assert_eq!(report.bytes_written, expected.len());
    }

    #[test]
    fn test_inject_is_idempotent() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let config = write(
            dir.path(),
            "client.conf",
            r#"{"ca-prefix": "/ndn", "ca-list": [{"ca-prefix": "/ndn", "certificate": ""}]}"#,
        );

        inject(&cert, &config).unwrap();
        let first = fs::read(&config).unwrap();
        inject(&cert, &config).unwrap();
        let second = fs::read(&config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_ca_list_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let original = r#"{"ca-list": []}"#;
        let config = write(dir.path(), "client.conf", original);

        let err = inject(&cert, &config).unwrap_err();

        assert!(matches!(err, InjectError::MissingField { .. }));
        assert_eq!(fs::read_to_string(&config).unwrap(), original);
    }

    #[test]
    fn test_invalid_json_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let original = "{\"ca-list\": [";
        let config = write(dir.path(), "client.conf", original);

        let err = inject(&cert, &config).unwrap_err();

        assert!(matches!(err, InjectError::InvalidJson { .. }));
        assert_eq!(fs::read_to_string(&config).unwrap(), original);
    }

    #[test]
    fn test_missing_cert_file() {
        let dir = tempdir().unwrap();
        let original = r#"{"ca-list": [{"certificate": "OLD"}]}"#;
        let config = write(dir.path(), "client.conf", original);
        let missing = dir.path().join("nope.cert");

        let err = inject(&missing, &config).unwrap_err();

        assert!(matches!(err, InjectError::FileNotFound(ref p) if p == &missing));
        assert_eq!(fs::read_to_string(&config).unwrap(), original);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);

        let err = inject(&cert, &dir.path().join("client.conf")).unwrap_err();

        assert!(matches!(err, InjectError::FileNotFound(_)));
    }

    #[test]
    fn test_non_utf8_cert_is_unreadable() {
        let dir = tempdir().unwrap();
        let cert = dir.path().join("anchor.cert");
        fs::write(&cert, [0xff, 0xfe, 0x00]).unwrap();
        let config = write(dir.path(), "client.conf", r#"{"ca-list": [{"certificate": ""}]}"#);

        let err = inject(&cert, &config).unwrap_err();

        assert!(matches!(err, InjectError::FileUnreadable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let config = write(dir.path(), "client.conf", r#"{"ca-list": [{"certificate": ""}]}"#);
        fs::set_permissions(&config, fs::Permissions::from_mode(0o644)).unwrap();

        inject(&cert, &config).unwrap();

        let mode = fs::metadata(&config).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_config_rewrites_target() {
        let dir = tempdir().unwrap();
        let cert = write(dir.path(), "anchor.cert", CERT);
        let real = write(dir.path(), "real.conf", r#"{"ca-list": [{"certificate": "OLD"}]}"#);
        let link = dir.path().join("client.conf");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        inject(&cert, &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let written: Value = serde_json::from_str(&fs::read_to_string(&real).unwrap()).unwrap();
        assert_eq!(written["ca-list"][0]["certificate"], CERT);
    }
}

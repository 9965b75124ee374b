//! Integration tests for the probe strategy chain.
//!
//! Uses small recording fakes for the ports so the order of calls made by
//! `LibraryProbe` can be asserted from outside the crate.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use cledger_core::{
    CheckFailure, CompilerCheckPort, InMemoryRegistry, LibraryProbe, LibrarySpec, LinkCheck,
    LookupError, PackageConfigPort, PackageFlags, ProbeError, ProbeRequest, ProbeSource,
};

type CallLog = Rc<RefCell<Vec<String>>>;

struct FakeCompiler {
    log: CallLog,
    /// Library search dir that makes the link succeed; `None` always fails.
    accepts: Option<Vec<PathBuf>>,
}

impl CompilerCheckPort for FakeCompiler {
    fn check_library(&self, check: &LinkCheck) -> Result<(), CheckFailure> {
        self.log.borrow_mut().push(format!("cxx:{}", check.libpaths.len()));
        match &self.accepts {
            Some(paths) if *paths == check.libpaths => Ok(()),
            _ => Err(CheckFailure::Rejected(format!(
                "/usr/bin/ld: cannot find -l{}",
                check.lib
            ))),
        }
    }
}

struct FakePackages {
    log: CallLog,
    registered: bool,
}

impl PackageConfigPort for FakePackages {
    fn lookup(&self, package: &str) -> Result<PackageFlags, LookupError> {
        self.log.borrow_mut().push(format!("pkg:{package}"));
        if self.registered {
            Ok(PackageFlags {
                version: Some("1.23".into()),
                libs: vec![package.to_string(), "snappy".into()],
                ..PackageFlags::default()
            })
        } else {
            Err(LookupError::NotRegistered(package.to_string()))
        }
    }
}

fn probe(log: &CallLog, accepts: Option<Vec<PathBuf>>, registered: bool) -> LibraryProbe {
    LibraryProbe::new(
        LibrarySpec::default(),
        Box::new(FakeCompiler {
            log: Rc::clone(log),
            accepts,
        }),
        Box::new(FakePackages {
            log: Rc::clone(log),
            registered,
        }),
    )
}

#[test]
fn registry_hit_never_runs_compiler() {
    let log = CallLog::default();
    let mut registry = InMemoryRegistry::new();

    let result = probe(&log, Some(Vec::new()), true)
        .probe(&ProbeRequest::default(), &mut registry)
        .unwrap();

    assert_eq!(*log.borrow(), vec!["pkg:leveldb"]);
    assert_eq!(result.source, Some(ProbeSource::PackageMetadata));
    assert_eq!(result.flags.libs, vec!["leveldb", "snappy"]);
    assert!(registry.is_global("HAVE_LEVELDB"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_miss_falls_through_to_bare_check() {
    let log = CallLog::default();
    let mut registry = InMemoryRegistry::new();

    let result = probe(&log, Some(Vec::new()), false)
        .probe(&ProbeRequest::default(), &mut registry)
        .unwrap();

    assert_eq!(*log.borrow(), vec!["pkg:leveldb", "cxx:0"]);
    assert_eq!(result.source, Some(ProbeSource::SystemDefault));
    assert!(!registry.is_global("HAVE_LEVELDB"));
    assert!(registry.get("LEVELDB").is_some());
}

#[test]
fn root_skips_registry_entirely() {
    let log = CallLog::default();
    let mut registry = InMemoryRegistry::new();
    let accepts = vec![PathBuf::from("/usr/local/lib")];

    let result = probe(&log, Some(accepts), true)
        .probe(&ProbeRequest::default().with_root("/usr/local"), &mut registry)
        .unwrap();

    assert_eq!(*log.borrow(), vec!["cxx:1"]);
    assert_eq!(result.include_path.as_deref(), Some("/usr/local/include"));
    assert_eq!(result.lib_path.as_deref(), Some("/usr/local/lib"));
}

#[test]
fn mandatory_failure_reports_library_not_found() {
    let log = CallLog::default();
    let mut registry = InMemoryRegistry::new();

    let err = probe(&log, None, false)
        .probe(&ProbeRequest::default(), &mut registry)
        .unwrap_err();

    let ProbeError::LibraryNotFound { library, .. } = &err;
    assert_eq!(library, "leveldb");
    assert!(err.to_string().contains("cannot find -lleveldb"));
    assert!(registry.is_empty());
}

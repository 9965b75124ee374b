//! Library probe service.
//!
//! Decides whether a native library is available by running an ordered list
//! of detection strategies and stopping at the first that succeeds:
//!
//! 1. `ExplicitRoot`: link check against `<root>/include` and `<root>/lib`
//!    (only when the caller gave a root; no other strategy runs then)
//! 2. `PackageMetadata`: package registry lookup for cflags and libs
//! 3. `SystemDefault`: link check with the compiler's default search paths
//!
//! # Global define
//!
//! The result is normally stored in the registry under the caller's variable
//! name only. When `PackageMetadata` wins, the define is additionally
//! registered process-wide through [`ConfigRegistry::define_global`]. No other
//! strategy touches global state.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::ports::{CompilerCheckPort, ConfigRegistry, LinkCheck, PackageConfigPort};
use crate::probe::{
    BuildFlags, LibrarySpec, ProbeError, ProbeRequest, ProbeResult, ProbeSource, SearchLocation,
};

/// One detection strategy, in the order the probe tries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    ExplicitRoot(PathBuf),
    PackageMetadata,
    SystemDefault,
}

impl Strategy {
    /// The strategies to run for a request, in order.
    pub fn plan(request: &ProbeRequest) -> Vec<Self> {
        match &request.root {
            Some(root) => vec![Self::ExplicitRoot(root.clone())],
            None => vec![Self::PackageMetadata, Self::SystemDefault],
        }
    }

    pub const fn source(&self) -> ProbeSource {
        match self {
            Self::ExplicitRoot(_) => ProbeSource::ExplicitRoot,
            Self::PackageMetadata => ProbeSource::PackageMetadata,
            Self::SystemDefault => ProbeSource::SystemDefault,
        }
    }
}

/// Outcome of a single strategy.
#[derive(Debug)]
enum Outcome {
    Found(BuildFlags),
    Missing(String),
}

/// Runs the strategy chain against injected compiler and package ports.
pub struct LibraryProbe {
    library: LibrarySpec,
    compiler: Box<dyn CompilerCheckPort>,
    packages: Box<dyn PackageConfigPort>,
}

impl LibraryProbe {
    pub fn new(
        library: LibrarySpec,
        compiler: Box<dyn CompilerCheckPort>,
        packages: Box<dyn PackageConfigPort>,
    ) -> Self {
        Self {
            library,
            compiler,
            packages,
        }
    }

    pub const fn library(&self) -> &LibrarySpec {
        &self.library
    }

    /// Probe for the library and record a positive result in `registry`.
    ///
    /// Returns `Ok` with `found = false` when nothing was detected and the
    /// request is optional. Mandatory requests fail with
    /// [`ProbeError::LibraryNotFound`] instead.
    pub fn probe(
        &self,
        request: &ProbeRequest,
        registry: &mut dyn ConfigRegistry,
    ) -> Result<ProbeResult, ProbeError> {
        let define = request.define_flag();
        info!(
            library = %self.library.name,
            store = %request.variable_name,
            "Checking for {} library",
            self.library.name
        );

        let mut last_failure = String::new();
        for strategy in Strategy::plan(request) {
            debug!(?strategy, "Trying detection strategy");
            match self.attempt(&strategy) {
                Outcome::Found(flags) => {
                    let result = ProbeResult::found(define, strategy.source(), flags);
                    if result.global_define {
                        registry.define_global(&result.define_flag);
                    }
                    registry.store(&request.variable_name, &result);
                    info!(
                        library = %self.library.name,
                        source = %strategy.source(),
                        define = %result.define_flag,
                        "Found {} library",
                        self.library.name
                    );
                    return Ok(result);
                }
                Outcome::Missing(reason) => {
                    debug!(?strategy, %reason, "Strategy did not find library");
                    last_failure = reason;
                }
            }
        }

        if request.mandatory {
            let location = request
                .root
                .clone()
                .map_or(SearchLocation::SystemPaths, SearchLocation::Root);
            return Err(ProbeError::LibraryNotFound {
                library: self.library.name.clone(),
                location,
                reason: last_failure,
            });
        }

        warn!(
            library = %self.library.name,
            reason = %last_failure,
            "{} library not found; continuing without it",
            self.library.name
        );
        Ok(ProbeResult::not_found(define))
    }

    fn attempt(&self, strategy: &Strategy) -> Outcome {
        match strategy {
            Strategy::ExplicitRoot(root) => {
                let include = PathBuf::from(format!("{}/include", root.display()));
                let libpath = PathBuf::from(format!("{}/lib", root.display()));
                let check = self
                    .link_check()
                    .with_include(include.clone())
                    .with_libpath(libpath.clone());
                self.run_check(&check, || {
                    BuildFlags::for_link(&self.library.name, Some(&include), Some(&libpath))
                })
            }
            Strategy::PackageMetadata => match self.packages.lookup(&self.library.name) {
                Ok(flags) => {
                    debug!(version = ?flags.version, "Package registry reported flags");
                    Outcome::Found(flags.into())
                }
                Err(e) => Outcome::Missing(e.to_string()),
            },
            Strategy::SystemDefault => {
                let check = self.link_check();
                self.run_check(&check, || {
                    BuildFlags::for_link(&self.library.name, None, None)
                })
            }
        }
    }

    fn link_check(&self) -> LinkCheck {
        LinkCheck::new(self.library.name.clone()).with_header(self.library.header.clone())
    }

    fn run_check(&self, check: &LinkCheck, flags: impl FnOnce() -> BuildFlags) -> Outcome {
        match self.compiler.check_library(check) {
            Ok(()) => Outcome::Found(flags()),
            Err(e) => Outcome::Missing(e.to_string()),
        }
    }
}

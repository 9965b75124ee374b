//! Library probe domain types.
//!
//! A probe is a one-shot detection check for the presence and location of a
//! native library. These types describe what the caller asks for and what the
//! build orchestrator receives back. They carry no I/O.

mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::{ProbeError, SearchLocation};

/// Default uselib-store name for the LevelDB probe.
pub const DEFAULT_VARIABLE_NAME: &str = "LEVELDB";

/// Default library name passed to the linker (`-lleveldb`).
pub const DEFAULT_LIBRARY: &str = "leveldb";

/// Build the `HAVE_<NAME>` define for a variable name.
pub fn define_name(variable_name: &str) -> String {
    format!("HAVE_{}", variable_name.to_uppercase())
}

/// The native library a probe looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySpec {
    /// Library name as given to the linker and to pkg-config.
    pub name: String,
    /// Header to include in the link check fragment, if any.
    pub header: Option<String>,
}

impl LibrarySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl Default for LibrarySpec {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY)
    }
}

/// Per-invocation probe parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Installation root given via `--with-<library>`.
    pub root: Option<PathBuf>,
    /// Whether a failed probe aborts the caller.
    pub mandatory: bool,
    /// Namespace for the result in the configuration registry.
    pub variable_name: String,
}

impl ProbeRequest {
    /// Mandatory probe without a root, stored under `variable_name`.
    pub fn new(variable_name: impl Into<String>) -> Self {
        Self {
            root: None,
            mandatory: true,
            variable_name: variable_name.into(),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_root_opt(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    #[must_use]
    pub const fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn define_flag(&self) -> String {
        define_name(&self.variable_name)
    }
}

impl Default for ProbeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE_NAME)
    }
}

/// Which detection strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeSource {
    /// Link check against `<root>/include` and `<root>/lib`.
    ExplicitRoot,
    /// Package metadata registry (pkg-config).
    PackageMetadata,
    /// Link check using only the compiler's default search paths.
    SystemDefault,
}

impl std::fmt::Display for ProbeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExplicitRoot => write!(f, "explicit root"),
            Self::PackageMetadata => write!(f, "package metadata"),
            Self::SystemDefault => write!(f, "system default paths"),
        }
    }
}

/// Compiler and linker flags gathered by a successful strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFlags {
    pub include_paths: Vec<PathBuf>,
    pub link_paths: Vec<PathBuf>,
    pub libs: Vec<String>,
    /// Extra `-D` defines reported by the package registry, as `(name, value)`.
    pub defines: Vec<(String, Option<String>)>,
}

impl BuildFlags {
    /// Flags for a plain link against `lib` with optional search paths.
    pub fn for_link(lib: &str, include: Option<&Path>, libpath: Option<&Path>) -> Self {
        Self {
            include_paths: include.map(Path::to_path_buf).into_iter().collect(),
            link_paths: libpath.map(Path::to_path_buf).into_iter().collect(),
            libs: vec![lib.to_string()],
            defines: Vec::new(),
        }
    }
}

/// Outcome of one probe invocation, consumed by the build orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub found: bool,
    pub include_path: Option<String>,
    pub lib_path: Option<String>,
    pub define_flag: String,
    /// Strategy that found the library. `None` when nothing was found.
    pub source: Option<ProbeSource>,
    pub flags: BuildFlags,
    /// Whether the define was registered process-wide rather than under the
    /// caller's variable name. Only the package-metadata strategy sets this.
    pub global_define: bool,
}

impl ProbeResult {
    /// A positive result built from the flags of the winning strategy.
    ///
    /// `include_path` and `lib_path` are the first entries of the respective
    /// search path lists.
    pub fn found(define_flag: String, source: ProbeSource, flags: BuildFlags) -> Self {
        let include_path = flags.include_paths.first().map(PathBuf::as_path).map(display_path);
        let lib_path = flags.link_paths.first().map(PathBuf::as_path).map(display_path);
        Self {
            found: true,
            include_path,
            lib_path,
            define_flag,
            source: Some(source),
            global_define: source == ProbeSource::PackageMetadata,
            flags,
        }
    }

    /// A negative result for an optional probe.
    pub fn not_found(define_flag: String) -> Self {
        Self {
            found: false,
            include_path: None,
            lib_path: None,
            define_flag,
            source: None,
            flags: BuildFlags::default(),
            global_define: false,
        }
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

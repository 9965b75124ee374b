//! Core services.

mod library_probe;

pub use library_probe::{LibraryProbe, Strategy};

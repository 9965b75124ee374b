//! Command handlers.
//!
//! Each handler writes its command output to the given writer so it can be
//! exercised against a buffer in tests.

pub mod inject_cert;
pub mod probe;

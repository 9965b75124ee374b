//! Client configuration certificate injection.
//!
//! Test setups ship a `client.conf` JSON file whose first trusted CA entry
//! must carry the anchor certificate generated for that run. This module
//! parses the document, swaps in the certificate text, and rewrites the file.

mod document;
mod error;
mod inject;

pub use document::{CA_LIST_KEY, CERTIFICATE_KEY, ClientConfigDocument};
pub use error::{InjectError, MissingField};
pub use inject::{InjectReport, inject};

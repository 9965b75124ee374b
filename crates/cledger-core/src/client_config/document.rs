//! Client configuration document.
//!
//! The document is kept as a generic JSON value so that every field other
//! than the injected certificate survives a rewrite untouched, key order
//! included.

use serde_json::Value;

use super::error::MissingField;

/// Array of trusted certificate-authority entries.
pub const CA_LIST_KEY: &str = "ca-list";

/// Field holding the certificate text inside a `ca-list` entry.
pub const CERTIFICATE_KEY: &str = "certificate";

/// A parsed client configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfigDocument {
    value: Value,
}

impl ClientConfigDocument {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(|value| Self { value })
    }

    pub const fn as_value(&self) -> &Value {
        &self.value
    }

    /// Current value of `ca-list[0].certificate`.
    pub fn certificate(&self) -> Result<&Value, MissingField> {
        let entry = self.first_ca_entry()?;
        entry
            .get(CERTIFICATE_KEY)
            .ok_or(MissingField("ca-list[0].certificate"))
    }

    /// Overwrite `ca-list[0].certificate`, returning the previous value.
    ///
    /// Never creates structure: if `ca-list` is absent or empty, or its first
    /// entry has no `certificate` key, the document is left unchanged.
    pub fn set_certificate(&mut self, certificate: &str) -> Result<Value, MissingField> {
        self.certificate()?;
        let slot = self
            .value
            .get_mut(CA_LIST_KEY)
            .and_then(|list| list.get_mut(0))
            .and_then(|entry| entry.get_mut(CERTIFICATE_KEY))
            .ok_or(MissingField("ca-list[0].certificate"))?;
        Ok(std::mem::replace(slot, Value::String(certificate.to_string())))
    }

    /// Render with 2-space indentation and no trailing newline.
    ///
    /// Non-ASCII text is written as raw UTF-8, not as `\uXXXX` escapes.
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.value)
    }

    fn first_ca_entry(&self) -> Result<&Value, MissingField> {
        let list = self
            .value
            .get(CA_LIST_KEY)
            .and_then(Value::as_array)
            .ok_or(MissingField("ca-list"))?;
        let entry = list.first().ok_or(MissingField("ca-list[0]"))?;
        if entry.is_object() {
            Ok(entry)
        } else {
            Err(MissingField("ca-list[0].certificate"))
        }
    }
}

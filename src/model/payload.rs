//! Base64 payload sent to the backend.

/// Base64 image bytes with the data URL prefix stripped.
///
/// Only the encoder creates payloads, so a value of this type never
/// carries a `data:` scheme or MIME metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub(crate) fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    /// The base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

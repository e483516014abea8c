//! Encoding user files into base64 payloads.
//!
//! A file is read once as a data URL and everything after the first comma is
//! kept. The read is the one suspension point of this stage.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::constants::DEFAULT_FILE_MIME;
use crate::error::{PipelineError, Result};
use crate::model::EncodedPayload;

/// A user-supplied file.
///
/// Implemented by the browser's `File` on wasm and by [`BytesFile`] for
/// in-memory data.
pub trait FileSource {
    /// File name as shown to the user.
    fn name(&self) -> String;

    /// URL an `<img>` can display without reading the file first.
    fn preview_url(&self) -> Result<String>;

    /// Read the whole file as a `data:` URL.
    fn read_data_url(&self) -> impl Future<Output = Result<String>>;
}

impl<F: FileSource> FileSource for &F {
    fn name(&self) -> String {
        (**self).name()
    }

    fn preview_url(&self) -> Result<String> {
        (**self).preview_url()
    }

    fn read_data_url(&self) -> impl Future<Output = Result<String>> {
        (**self).read_data_url()
    }
}

/// Extract the payload of a data URL (the part after the first comma).
pub fn payload_from_data_url(data_url: &str) -> Result<EncodedPayload> {
    data_url
        .split_once(',')
        .map(|(_, payload)| EncodedPayload::new(payload))
        .ok_or(PipelineError::MalformedDataUrl)
}

/// Read a file and produce its base64 payload.
pub async fn encode_file<F: FileSource>(file: &F) -> Result<EncodedPayload> {
    let data_url = file.read_data_url().await?;
    let payload = payload_from_data_url(&data_url)?;
    log::debug!(
        "Encoded {} ({} base64 bytes)",
        file.name(),
        payload.as_str().len()
    );
    Ok(payload)
}

/// Build a base64 data URL.
pub fn data_url(mime: &str, base64: &str) -> String {
    format!("data:{mime};base64,{base64}")
}

/// A file held in memory.
#[derive(Debug, Clone)]
pub struct BytesFile {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl BytesFile {
    /// Create an in-memory file. An empty `mime` falls back to
    /// `application/octet-stream`, the same way browsers label unknown files.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime = mime.into();
        Self {
            name: name.into(),
            mime: if mime.is_empty() {
                DEFAULT_FILE_MIME.to_string()
            } else {
                mime
            },
            bytes,
        }
    }

    fn to_data_url(&self) -> String {
        data_url(&self.mime, &STANDARD.encode(&self.bytes))
    }
}

impl FileSource for BytesFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn preview_url(&self) -> Result<String> {
        Ok(self.to_data_url())
    }

    async fn read_data_url(&self) -> Result<String> {
        Ok(self.to_data_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_after_first_comma() {
        let payload = payload_from_data_url("data:image/png;base64,AAAA").unwrap();
        assert_eq!(payload.as_str(), "AAAA");

        // Only the first comma separates metadata from payload
        let payload = payload_from_data_url("data:text/plain,a,b").unwrap();
        assert_eq!(payload.as_str(), "a,b");
    }

    #[test]
    fn test_empty_file_gives_empty_payload() {
        let payload = payload_from_data_url("data:application/octet-stream;base64,").unwrap();
        assert_eq!(payload.as_str(), "");
    }

    #[test]
    fn test_missing_separator_is_error() {
        let err = payload_from_data_url("data:image/png;base64").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedDataUrl));
    }

    #[test]
    fn test_bytes_file_encodes_base64() {
        let file = BytesFile::new("hi.txt", "text/plain", b"hello".to_vec());

        let url = pollster::block_on(file.read_data_url()).unwrap();
        assert_eq!(url, "data:text/plain;base64,aGVsbG8=");

        let payload = pollster::block_on(encode_file(&file)).unwrap();
        assert_eq!(payload.as_str(), "aGVsbG8=");
        assert_eq!(STANDARD.decode(payload.as_str()).unwrap(), b"hello");
    }

    #[test]
    fn test_bytes_file_default_mime() {
        let file = BytesFile::new("blob", "", vec![1, 2, 3]);
        assert!(file.preview_url().unwrap().starts_with("data:application/octet-stream;base64,"));
    }
}

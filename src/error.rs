//! Error types for the file processing pipeline.

use thiserror::Error;

/// Errors that can occur while ingesting, encoding or processing a file.
///
/// Every variant is localized to a single file (or to the legend fetch);
/// none of them is fatal to the page.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The file could not be read into a data URL
    #[error("Failed to read '{name}': {message}")]
    Read {
        /// Name of the file that failed
        name: String,
        /// Reason reported by the reader
        message: String,
    },

    /// A data URL without the `,` separating metadata from payload
    #[error("Malformed data URL: no payload separator")]
    MalformedDataUrl,

    /// The backend answered with an empty (falsy) result
    #[error("Image processing failed")]
    ProcessingFailed,

    /// The RPC bridge itself failed (missing function, rejected promise)
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// The backend's answer did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// A DOM operation failed
    #[error("DOM error: {0}")]
    Dom(String),
}

impl PipelineError {
    /// Create a read error for the named file.
    pub fn read(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a bridge error with a message.
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge(message.into())
    }

    /// Create a decode error with a message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a DOM error with a message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

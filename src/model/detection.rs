//! Detection results returned by the processing backend.

use serde::{Deserialize, Serialize};

/// One recognized object instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Label index, meant to index into the class-name list
    pub class: i64,
    /// Score in `[0, 1]`
    pub confidence: f64,
}

impl Detection {
    /// Create a new detection.
    pub fn new(class: i64, confidence: f64) -> Self {
        Self { class, confidence }
    }
}

/// Successful answer of the backend for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Processed image, base64 without a data URL prefix
    pub processed_image: String,
    /// Detections in backend order
    pub detections: Vec<Detection>,
}

impl ProcessingResult {
    /// Create a new result.
    pub fn new(processed_image: impl Into<String>, detections: Vec<Detection>) -> Self {
        Self {
            processed_image: processed_image.into(),
            detections,
        }
    }
}

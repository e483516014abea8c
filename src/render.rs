//! Gallery rendering.
//!
//! The pipeline describes what to show as [`GalleryNode`]s and hands them to
//! a [`Gallery`]. The gallery only grows: nodes are never removed or updated
//! after they are appended.

use std::cell::RefCell;

use crate::constants::{ORIGINAL_LABEL, PROCESSED_LABEL};
use crate::encoder::data_url;
use crate::model::Detection;

/// One block appended to the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryNode {
    /// An image with a caption under it
    Image { src: String, label: String },
    /// One detection line
    Detection { text: String },
    /// Per-file failure notice
    Error { text: String },
}

impl GalleryNode {
    /// Caption of an image node.
    pub fn label(&self) -> Option<&str> {
        match self {
            GalleryNode::Image { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Text content of a detection or error node.
    pub fn text(&self) -> Option<&str> {
        match self {
            GalleryNode::Detection { text } | GalleryNode::Error { text } => Some(text.as_str()),
            GalleryNode::Image { .. } => None,
        }
    }
}

/// Image node with the given source and caption.
pub fn image_node(src: impl Into<String>, label: impl Into<String>) -> GalleryNode {
    GalleryNode::Image {
        src: src.into(),
        label: label.into(),
    }
}

/// Whether an image source is a `blob:` URL that must be revoked once shown.
pub fn is_object_url(src: &str) -> bool {
    src.starts_with("blob:")
}

/// Node showing the uploaded file.
pub fn original_node(src: impl Into<String>) -> GalleryNode {
    image_node(src, ORIGINAL_LABEL)
}

/// Node showing the backend's processed image.
pub fn processed_node(mime: &str, base64: &str) -> GalleryNode {
    image_node(data_url(mime, base64), PROCESSED_LABEL)
}

/// Two-decimal text of a score, rounding exact ties away from zero like
/// JavaScript's `toFixed(2)`.
///
/// `{:.2}` rounds ties to even, so 0.125 would print as `0.12`. A double can
/// only sit exactly halfway between two hundredths when it is an odd number
/// of eighths, and those values scale by 100 without loss.
pub fn format_confidence(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{:.2}", value);
    }

    let hundredths = (value * 100.0).round() as i64;
    let sign = if hundredths < 0 { "-" } else { "" };
    let abs = hundredths.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// `Class {class}: {confidence}` with the confidence at two decimals.
pub fn detection_text(detection: &Detection) -> String {
    format!(
        "Class {}: {}",
        detection.class,
        format_confidence(detection.confidence)
    )
}

pub fn detection_node(detection: &Detection) -> GalleryNode {
    GalleryNode::Detection {
        text: detection_text(detection),
    }
}

/// User-facing failure text for a file.
pub fn error_text(file_name: &str) -> String {
    format!("Error processing {file_name}. Please try again.")
}

pub fn error_node(file_name: &str) -> GalleryNode {
    GalleryNode::Error {
        text: error_text(file_name),
    }
}

/// Append-only sink for gallery nodes.
pub trait Gallery {
    fn append(&self, node: GalleryNode);
}

impl<G: Gallery + ?Sized> Gallery for &G {
    fn append(&self, node: GalleryNode) {
        (**self).append(node)
    }
}

/// Gallery that records nodes in memory.
#[derive(Debug, Default)]
pub struct MemoryGallery {
    nodes: RefCell<Vec<GalleryNode>>,
}

impl MemoryGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in order.
    pub fn nodes(&self) -> Vec<GalleryNode> {
        self.nodes.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }
}

impl Gallery for MemoryGallery {
    fn append(&self, node: GalleryNode) {
        self.nodes.borrow_mut().push(node);
    }
}

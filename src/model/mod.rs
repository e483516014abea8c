//! Data models exchanged with the processing backend.

mod class_names;
mod detection;
mod payload;

pub use class_names::ClassNameList;
pub use detection::{Detection, ProcessingResult};
pub use payload::EncodedPayload;

//! dropscope - drag-and-drop front end for an image detection backend
//!
//! Users drop or pick image files; each file is shown, sent as base64 to the
//! backend over the page's RPC bridge, and the processed image plus its
//! detections are appended to a gallery. A class-name legend is fetched once
//! at startup.
//!
//! The pipeline is platform-neutral and tested natively. The browser binding
//! lives in the `wasm*` modules, compiled only for `wasm32`.

pub mod bridge;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod ingestion;
pub mod legend;
pub mod model;
pub mod pipeline;
pub mod render;

pub use bridge::{ProcessingBridge, RemoteClient};
pub use config::{ConfigError, FrontendConfig, LogLevel};
pub use encoder::{BytesFile, FileSource};
pub use error::PipelineError;
pub use pipeline::{BatchSummary, FileOutcome, Pipeline};
pub use render::{Gallery, GalleryNode, MemoryGallery};

#[cfg(test)]
mod tests;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod wasm_bridge;
#[cfg(target_arch = "wasm32")]
mod wasm_dom;
#[cfg(target_arch = "wasm32")]
mod wasm_file;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

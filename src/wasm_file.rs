//! Browser `File` support.
//!
//! `FileReader` reports through `onload`/`onerror` callbacks. Both are bound
//! to the resolve/reject functions of a `Promise`, so a read is a single
//! awaited future and no Rust closure has to outlive it.

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader, Url};

use crate::encoder::FileSource;
use crate::error::{PipelineError, Result};
use crate::ingestion::FileBatch;

/// A file picked or dropped by the user.
#[derive(Debug, Clone)]
pub struct WebFile(File);

impl WebFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }
}

impl FileSource for WebFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn preview_url(&self) -> Result<String> {
        Url::create_object_url_with_blob(&self.0).map_err(|e| PipelineError::dom(js_error_message(&e)))
    }

    async fn read_data_url(&self) -> Result<String> {
        let name = self.0.name();
        let reader = FileReader::new().map_err(|e| PipelineError::read(&name, js_error_message(&e)))?;

        let done = Promise::new(&mut |resolve, reject| {
            reader.set_onload(Some(&resolve));
            reader.set_onerror(Some(&reject));
        });
        reader
            .read_as_data_url(&self.0)
            .map_err(|e| PipelineError::read(&name, js_error_message(&e)))?;

        let outcome = JsFuture::from(done).await;
        reader.set_onload(None);
        reader.set_onerror(None);

        if outcome.is_err() {
            let message = reader
                .error()
                .map(|e| e.message())
                .unwrap_or_else(|| "read aborted".to_string());
            return Err(PipelineError::read(name, message));
        }

        reader
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| PipelineError::read(name, "reader produced no data URL"))
    }
}

/// Snapshot a `FileList` (from a drop or a file input) in source order.
///
/// The `File` handles stay valid after the input is cleared.
pub fn file_batch(list: &FileList) -> FileBatch<WebFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(WebFile::new)
        .collect()
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

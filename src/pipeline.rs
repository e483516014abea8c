//! Per-file processing pipeline.
//!
//! For each file, in order:
//! 1. append the Original image
//! 2. read and encode the file
//! 3. call the backend
//! 4. append the Processed image and one line per detection
//!
//! Any failure in steps 2-4 is logged and replaced by one error block for that
//! file. The next file starts only after the current one has finished.

use crate::bridge::{ProcessingBridge, RemoteClient};
use crate::constants::PROCESSED_MIME;
use crate::encoder::{FileSource, encode_file};
use crate::error::Result;
use crate::model::ProcessingResult;
use crate::render::{Gallery, detection_node, error_node, original_node, processed_node};

/// How one file ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Processed image and this many detections were rendered
    Processed { detections: usize },
    /// An error block was rendered
    Failed,
}

/// Counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }

    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Processed { .. } => self.processed += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// File ingestion-to-display pipeline.
pub struct Pipeline<B, G> {
    client: RemoteClient<B>,
    gallery: G,
    processed_mime: String,
}

impl<B: ProcessingBridge, G: Gallery> Pipeline<B, G> {
    pub fn new(client: RemoteClient<B>, gallery: G) -> Self {
        Self {
            client,
            gallery,
            processed_mime: PROCESSED_MIME.to_string(),
        }
    }

    /// Set the MIME type processed images are displayed with.
    pub fn with_processed_mime(mut self, mime: impl Into<String>) -> Self {
        self.processed_mime = mime.into();
        self
    }

    pub fn client(&self) -> &RemoteClient<B> {
        &self.client
    }

    pub fn gallery(&self) -> &G {
        &self.gallery
    }

    /// Process files strictly one after another, in the given order.
    pub async fn handle_files<F, I>(&self, files: I) -> BatchSummary
    where
        F: FileSource,
        I: IntoIterator<Item = F>,
    {
        let mut summary = BatchSummary::default();
        for file in files {
            let outcome = self.process_file(&file).await;
            summary.record(outcome);
        }
        log::info!(
            "Batch finished: {} processed, {} failed",
            summary.processed,
            summary.failed
        );
        summary
    }

    /// Run one file through the pipeline. Never fails; errors are rendered.
    pub async fn process_file<F: FileSource>(&self, file: &F) -> FileOutcome {
        let name = file.name();
        log::info!("Processing {}", name);

        let preview = file.preview_url().unwrap_or_else(|e| {
            log::warn!("No preview for {}: {}", name, e);
            String::new()
        });
        self.gallery.append(original_node(preview));

        match self.run(file).await {
            Ok(result) => {
                let detections = result.detections.len();
                self.render_result(&result);
                FileOutcome::Processed { detections }
            }
            Err(e) => {
                log::error!("Error processing image {}: {}", name, e);
                self.gallery.append(error_node(&name));
                FileOutcome::Failed
            }
        }
    }

    async fn run<F: FileSource>(&self, file: &F) -> Result<ProcessingResult> {
        let payload = encode_file(file).await?;
        self.client.process(&payload).await
    }

    fn render_result(&self, result: &ProcessingResult) {
        self.gallery
            .append(processed_node(&self.processed_mime, &result.processed_image));
        for detection in &result.detections {
            self.gallery.append(detection_node(detection));
        }
    }
}

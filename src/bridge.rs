//! Remote processing client.
//!
//! The backend is reached through an RPC bridge the page provides. This
//! module only knows the two calls it exposes; the transport is external.

use crate::error::{PipelineError, Result};
use crate::model::{ClassNameList, EncodedPayload, ProcessingResult};

/// Backend functions exposed over the RPC bridge.
///
/// `process_image` returns `Ok(None)` when the backend answers with a falsy
/// value; transport failures are `Err`.
pub trait ProcessingBridge {
    /// Process one base64-encoded image.
    fn process_image(
        &self,
        payload: &EncodedPayload,
    ) -> impl Future<Output = Result<Option<ProcessingResult>>>;

    /// Fetch the class-name list.
    fn class_names(&self) -> impl Future<Output = Result<ClassNameList>>;
}

/// Client turning the bridge's falsy answers into errors.
///
/// No retry and no timeout: a backend that never answers stalls the caller.
#[derive(Debug, Clone)]
pub struct RemoteClient<B> {
    bridge: B,
}

impl<B: ProcessingBridge> RemoteClient<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// The underlying bridge.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Process one payload. An empty answer is [`PipelineError::ProcessingFailed`].
    pub async fn process(&self, payload: &EncodedPayload) -> Result<ProcessingResult> {
        match self.bridge.process_image(payload).await? {
            Some(result) => {
                log::debug!(
                    "Backend returned {} detection(s)",
                    result.detections.len()
                );
                Ok(result)
            }
            None => Err(PipelineError::ProcessingFailed),
        }
    }

    /// Fetch the class-name list.
    pub async fn class_names(&self) -> Result<ClassNameList> {
        self.bridge.class_names().await
    }
}

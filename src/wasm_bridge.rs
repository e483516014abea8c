//! RPC bridge to the backend functions exposed on the page.
//!
//! The page exposes backend functions on a global object (`eel` by default).
//! Calling one returns a thunk, and calling the thunk returns a promise of the
//! result: `ns.fn(arg)()`.

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::bridge::ProcessingBridge;
use crate::config::BridgeConfig;
use crate::error::{PipelineError, Result};
use crate::model::{ClassNameList, EncodedPayload, ProcessingResult};
use crate::wasm_file::js_error_message;

/// Bridge calling the page's exposed backend functions.
#[derive(Debug, Clone)]
pub struct JsBridge {
    config: BridgeConfig,
}

impl JsBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    async fn call(&self, function: &str, args: &Array) -> Result<JsValue> {
        let window = web_sys::window().ok_or_else(|| PipelineError::bridge("no window"))?;
        let namespace = Reflect::get(&window, &JsValue::from_str(&self.config.namespace))
            .map_err(|e| PipelineError::bridge(js_error_message(&e)))?;
        if namespace.is_undefined() || namespace.is_null() {
            return Err(PipelineError::bridge(format!(
                "'{}' is not defined",
                self.config.namespace
            )));
        }

        let func: Function = Reflect::get(&namespace, &JsValue::from_str(function))
            .map_err(|e| PipelineError::bridge(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| {
                PipelineError::bridge(format!(
                    "{}.{} is not a function",
                    self.config.namespace, function
                ))
            })?;

        let thunk: Function = func
            .apply(&namespace, args)
            .map_err(|e| PipelineError::bridge(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| PipelineError::bridge(format!("{} did not return a callable", function)))?;

        let pending = thunk
            .call0(&JsValue::NULL)
            .map_err(|e| PipelineError::bridge(js_error_message(&e)))?;

        log::trace!("Awaiting {}.{}", self.config.namespace, function);
        JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|e| PipelineError::bridge(js_error_message(&e)))
    }
}

impl ProcessingBridge for JsBridge {
    async fn process_image(&self, payload: &EncodedPayload) -> Result<Option<ProcessingResult>> {
        let args = Array::of1(&JsValue::from_str(payload.as_str()));
        let value = self.call(&self.config.process_image, &args).await?;
        if !value.is_truthy() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| PipelineError::decode(e.to_string()))
    }

    async fn class_names(&self) -> Result<ClassNameList> {
        let value = self.call(&self.config.class_names, &Array::new()).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| PipelineError::decode(e.to_string()))
    }
}

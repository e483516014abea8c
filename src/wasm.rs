use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Element, Event, HtmlInputElement};

use crate::bridge::RemoteClient;
use crate::config::{ConfigError, FrontendConfig};
use crate::constants::CONFIG_SCRIPT_ID;
use crate::error::{PipelineError, Result};
use crate::ingestion::{DragPhase, DropZone, DropZoneState, FileBatch};
use crate::legend::load_legend;
use crate::pipeline::Pipeline;
use crate::wasm_bridge::JsBridge;
use crate::wasm_dom::{DomGallery, DomLegend, find_element};
use crate::wasm_file::{WebFile, file_batch, js_error_message};

type WebPipeline = Pipeline<JsBridge, DomGallery>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = run() {
        web_sys::console::error_1(&format!("dropscope failed to start: {}", e).into());
    }
}

fn run() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| PipelineError::dom("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| PipelineError::dom("no document"))?;

    // Logging is configured by the page, so the config is parsed before any
    // log call and its error reported afterwards.
    let (config, config_error) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (FrontendConfig::default(), Some(e)),
    };
    if console_log::init_with_level(config.log_level.to_level()).is_err() {
        web_sys::console::warn_1(&"dropscope: logger already initialized".into());
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring page configuration: {}", e);
    }

    mount(&document, &config)?;
    log::info!("dropscope ready");
    Ok(())
}

/// Read the optional `<script type="application/json">` configuration block.
fn load_config(document: &Document) -> std::result::Result<FrontendConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => FrontendConfig::from_json(&json),
        _ => Ok(FrontendConfig::default()),
    }
}

/// Bind the front end to the page elements and start the legend fetch.
fn mount(document: &Document, config: &FrontendConfig) -> Result<()> {
    let ids = &config.ids;
    let drop_area = find_element(document, &ids.drop_area)?;
    let file_input: HtmlInputElement = find_element(document, &ids.file_input)?
        .dyn_into()
        .map_err(|_| PipelineError::dom(format!("#{} is not an <input>", ids.file_input)))?;
    let file_select = find_element(document, &ids.file_select)?;
    let gallery = DomGallery::new(
        document.clone(),
        find_element(document, &ids.gallery)?,
        config.styles.clone(),
    );
    let legend = DomLegend::new(document.clone(), find_element(document, &ids.legend_list)?);

    let client = RemoteClient::new(JsBridge::new(config.bridge.clone()));
    let pipeline = Rc::new(
        Pipeline::new(client.clone(), gallery).with_processed_mime(&config.processed_mime),
    );

    bind_drop_area(&drop_area, &config.styles.highlight, pipeline.clone())?;
    bind_file_picker(&file_select, &file_input, pipeline)?;

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = load_legend(&client, &legend).await {
            log::error!("Failed to load class names: {}", e);
        }
    });

    Ok(())
}

/// Start a batch in its own task. Batches may interleave; files within one
/// batch never do.
fn dispatch(pipeline: Rc<WebPipeline>, batch: FileBatch<WebFile>) {
    if batch.is_empty() {
        return;
    }
    log::info!("Queued {} file(s)", batch.len());
    wasm_bindgen_futures::spawn_local(async move {
        pipeline.handle_files(batch).await;
    });
}

fn set_highlight(drop_area: &Element, classes: &str, state: DropZoneState) {
    let on = state == DropZoneState::DragActive;
    let class_list = drop_area.class_list();
    for class in classes.split_whitespace() {
        if let Err(e) = class_list.toggle_with_force(class, on) {
            log::warn!("Failed to toggle class {}: {}", class, js_error_message(&e));
        }
    }
}

fn bind_drop_area(drop_area: &Element, highlight: &str, pipeline: Rc<WebPipeline>) -> Result<()> {
    let zone = Rc::new(RefCell::new(DropZone::new()));

    for phase in DragPhase::ALL {
        let zone = zone.clone();
        let pipeline = pipeline.clone();
        let target = drop_area.clone();
        let highlight = highlight.to_string();

        let handler = Closure::wrap(Box::new(move |event: Event| {
            if phase.suppresses_default() {
                event.prevent_default();
                event.stop_propagation();
            }

            let transition = zone.borrow_mut().apply(phase);
            if transition.changed {
                set_highlight(&target, &highlight, transition.state);
            }

            if phase.delivers_files() {
                let files = event
                    .dyn_ref::<DragEvent>()
                    .and_then(|e| e.data_transfer())
                    .and_then(|dt| dt.files());
                if let Some(files) = files {
                    dispatch(pipeline.clone(), file_batch(&files));
                }
            }
        }) as Box<dyn FnMut(Event)>);

        drop_area
            .add_event_listener_with_callback(phase.event_name(), handler.as_ref().unchecked_ref())
            .map_err(|e| PipelineError::dom(js_error_message(&e)))?;
        handler.forget(); // Listeners live as long as the page
    }

    Ok(())
}

fn bind_file_picker(
    file_select: &Element,
    file_input: &HtmlInputElement,
    pipeline: Rc<WebPipeline>,
) -> Result<()> {
    let input = file_input.clone();
    let onclick = Closure::wrap(Box::new(move |_event: Event| {
        input.click();
    }) as Box<dyn FnMut(Event)>);
    file_select
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .map_err(|e| PipelineError::dom(js_error_message(&e)))?;
    onclick.forget();

    let input = file_input.clone();
    let onchange = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(files) = input.files() {
            let batch = file_batch(&files);
            // Clearing lets the same file be picked again
            input.set_value("");
            dispatch(pipeline.clone(), batch);
        }
    }) as Box<dyn FnMut(Event)>);
    file_input
        .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
        .map_err(|e| PipelineError::dom(js_error_message(&e)))?;
    onchange.forget();

    Ok(())
}

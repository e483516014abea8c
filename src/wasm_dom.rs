//! DOM rendering of gallery nodes and legend items.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, Url};

use crate::config::Styles;
use crate::error::{PipelineError, Result};
use crate::legend::LegendList;
use crate::render::{Gallery, GalleryNode, is_object_url};
use crate::wasm_file::js_error_message;

/// Look up a required page element by id.
pub fn find_element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PipelineError::dom(format!("element #{} not found", id)))
}

/// The gallery container.
pub struct DomGallery {
    document: Document,
    container: Element,
    styles: Styles,
}

impl DomGallery {
    pub fn new(document: Document, container: Element, styles: Styles) -> Self {
        Self {
            document,
            container,
            styles,
        }
    }

    fn div(&self, class: &str, text: Option<&str>) -> std::result::Result<Element, JsValue> {
        let div = self.document.create_element("div")?;
        if !class.is_empty() {
            div.set_class_name(class);
        }
        div.set_text_content(text);
        Ok(div)
    }

    /// Build a detached subtree for a node.
    fn build(&self, node: &GalleryNode) -> std::result::Result<Element, JsValue> {
        match node {
            GalleryNode::Image { src, label } => {
                let container = self.div(&self.styles.image_container, None)?;

                let img: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
                if is_object_url(src) {
                    revoke_when_settled(&img, src);
                }
                img.set_src(src);
                img.set_alt(label);
                img.set_class_name(&self.styles.image);

                let caption = self.div(&self.styles.image_label, Some(label.as_str()))?;

                container.append_child(&img)?;
                container.append_child(&caption)?;
                Ok(container)
            }
            GalleryNode::Detection { text } => self.div("", Some(text.as_str())),
            GalleryNode::Error { text } => self.div(&self.styles.error, Some(text.as_str())),
        }
    }
}

/// Release a file preview URL once the `<img>` has decoded it (or given up).
///
/// Only one of `load`/`error` fires, so a single one-shot callback serves both.
fn revoke_when_settled(img: &HtmlImageElement, src: &str) {
    let url = src.to_string();
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke {}: {}", url, js_error_message(&e));
        }
    });
    img.set_onload(Some(revoke.unchecked_ref()));
    img.set_onerror(Some(revoke.unchecked_ref()));
}

impl Gallery for DomGallery {
    fn append(&self, node: GalleryNode) {
        let appended = self
            .build(&node)
            .and_then(|element| self.container.append_child(&element));
        if let Err(e) = appended {
            let what = node.label().or(node.text()).unwrap_or_default();
            log::error!("Failed to render '{}': {}", what, js_error_message(&e));
        }
    }
}

/// The legend `<ul>`/`<ol>`.
pub struct DomLegend {
    document: Document,
    list: Element,
}

impl DomLegend {
    pub fn new(document: Document, list: Element) -> Self {
        Self { document, list }
    }
}

impl LegendList for DomLegend {
    fn push_item(&self, text: String) {
        let appended = self.document.create_element("li").and_then(|li| {
            li.set_text_content(Some(text.as_str()));
            self.list.append_child(&li)
        });
        if let Err(e) = appended {
            log::error!("Failed to add legend item '{}': {}", text, js_error_message(&e));
        }
    }
}

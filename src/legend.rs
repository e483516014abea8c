//! Class-name legend.

use std::cell::RefCell;

use crate::bridge::{ProcessingBridge, RemoteClient};
use crate::error::Result;
use crate::model::ClassNameList;

/// `{index}. {name}` with a zero-based index.
pub fn legend_item_text(index: usize, name: &str) -> String {
    format!("{index}. {name}")
}

/// Legend lines for a class list, in backend order.
pub fn legend_items(names: &ClassNameList) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| legend_item_text(i, name))
        .collect()
}

/// Append-only list the legend is rendered into.
pub trait LegendList {
    fn push_item(&self, text: String);
}

/// Legend that records its items in memory.
#[derive(Debug, Default)]
pub struct MemoryLegend {
    items: RefCell<Vec<String>>,
}

impl MemoryLegend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }
}

impl LegendList for MemoryLegend {
    fn push_item(&self, text: String) {
        self.items.borrow_mut().push(text);
    }
}

/// Fetch the class names once and render one item per name.
///
/// Returns the number of items rendered. Nothing is rendered on failure.
pub async fn load_legend<B, L>(client: &RemoteClient<B>, list: &L) -> Result<usize>
where
    B: ProcessingBridge,
    L: LegendList + ?Sized,
{
    let names = client.class_names().await?;
    let items = legend_items(&names);
    let count = items.len();
    for item in items {
        list.push_item(item);
    }
    log::info!("Legend loaded with {} class(es)", count);
    Ok(count)
}

//! Flattened structure view: one entry per tab and per item, depth-first.

use crate::selection::{Locator, Selection};
use serde::Serialize;
use windstudio_model::{Document, Item};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEntry {
    pub tab_index: usize,
    /// Empty for tab entries.
    pub path: Vec<usize>,
    pub depth: usize,
    pub label: String,
    /// Set when a filter is active and the label does not match it.
    pub dimmed: bool,
    pub active: bool,
}

/// Builds the outline. `filter` is trimmed and matched case-insensitively
/// against item labels; tabs are never dimmed.
pub fn outline(document: &Document, selection: &Selection, filter: &str) -> Vec<OutlineEntry> {
    let filter = filter.trim().to_lowercase();
    let mut entries = Vec::new();

    for (tab_index, tab) in document.tabs.iter().enumerate() {
        let title = if tab.title.is_empty() { "Tab" } else { &tab.title };
        entries.push(OutlineEntry {
            tab_index,
            path: Vec::new(),
            depth: 0,
            label: format!("Tab: {}", title),
            dimmed: false,
            active: selection.points_at(&Locator::new(tab_index, Vec::new())),
        });

        for (index, item) in tab.items.iter().enumerate() {
            push_item(&mut entries, item, Locator::new(tab_index, vec![index]), selection, &filter);
        }
    }

    entries
}

fn push_item(entries: &mut Vec<OutlineEntry>, item: &Item, locator: Locator, selection: &Selection, filter: &str) {
    let label = item_label(item);
    let dimmed = !filter.is_empty() && !label.to_lowercase().contains(filter);

    entries.push(OutlineEntry {
        tab_index: locator.tab_index,
        path: locator.path.clone(),
        depth: locator.path.len(),
        label,
        dimmed,
        active: selection.points_at(&locator),
    });

    if let Some(children) = item.children() {
        for (index, child) in children.iter().enumerate() {
            let mut path = locator.path.clone();
            path.push(index);
            push_item(entries, child, Locator::new(locator.tab_index, path), selection, filter);
        }
    }
}

/// `"<type>: <title>"`, or just the type when untitled.
pub fn item_label(item: &Item) -> String {
    match item.title() {
        Some(title) => format!("{}: {}", item.type_tag(), title),
        None => item.type_tag().to_string(),
    }
}

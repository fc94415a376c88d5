//! # Selection
//!
//! What the user is currently pointing at:
//!
//! - `path: None` is the window level.
//! - `path: Some([])` is the tab at `tab_index`.
//! - `path: Some([i, j, ...])` is an item, descending through groups.
//!
//! Selections are validated lazily. A path that no longer resolves is
//! treated as "nothing selected" by whichever operation consumes it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub tab_index: usize,
    pub path: Option<Vec<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLevel {
    Window,
    Tab,
    Item,
}

impl Selection {
    pub fn window(tab_index: usize) -> Self {
        Self { tab_index, path: None }
    }

    pub fn tab(tab_index: usize) -> Self {
        Self {
            tab_index,
            path: Some(Vec::new()),
        }
    }

    pub fn item(tab_index: usize, path: Vec<usize>) -> Self {
        Self {
            tab_index,
            path: Some(path),
        }
    }

    pub fn level(&self) -> SelectionLevel {
        match &self.path {
            None => SelectionLevel::Window,
            Some(path) if path.is_empty() => SelectionLevel::Tab,
            Some(_) => SelectionLevel::Item,
        }
    }

    /// Locator of the selected tab or item; `None` at window level.
    pub fn locator(&self) -> Option<Locator> {
        self.path.as_ref().map(|path| Locator::new(self.tab_index, path.clone()))
    }

    /// Locator of the selected item; `None` unless an item is selected.
    pub fn item_locator(&self) -> Option<Locator> {
        self.locator().filter(|l| !l.is_tab())
    }

    /// Whether `locator` names exactly the selected node.
    pub fn points_at(&self, locator: &Locator) -> bool {
        self.tab_index == locator.tab_index && self.path.as_ref() == Some(&locator.path)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::tab(0)
    }
}

impl From<Locator> for Selection {
    fn from(locator: Locator) -> Self {
        Self::item(locator.tab_index, locator.path)
    }
}

/// A `(tab_index, path)` address. An empty path addresses the tab itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locator {
    pub tab_index: usize,
    pub path: Vec<usize>,
}

impl Locator {
    pub fn new(tab_index: usize, path: Vec<usize>) -> Self {
        Self { tab_index, path }
    }

    pub fn is_tab(&self) -> bool {
        self.path.is_empty()
    }

    /// Path of the containing group; empty for tab-root items.
    pub fn parent_path(&self) -> &[usize] {
        match self.path.split_last() {
            Some((_, parent)) => parent,
            None => &[],
        }
    }

    /// Position within the container.
    pub fn index(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Same container, different index.
    pub fn with_index(&self, index: usize) -> Locator {
        let mut path = self.parent_path().to_vec();
        path.push(index);
        Locator::new(self.tab_index, path)
    }
}

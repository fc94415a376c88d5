//! # Tree Store
//!
//! Path-addressed operations over `Document → Tab → Item (→ Item ...)`.
//!
//! Containers are found by walking paths, never through parent links. Every
//! operation returns `None` when its locator does not resolve or its guard
//! fails; the tree is left untouched in that case.

use crate::selection::Locator;
use windstudio_model::{Document, Item, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The list that directly holds a node.
#[derive(Debug)]
pub struct Container<'a> {
    pub list: &'a [Item],
    /// Owning group; `None` when the list is the tab root.
    pub parent: Option<&'a Item>,
    pub parent_path: Vec<usize>,
}

/// Where a newly created item lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionTarget {
    pub tab_index: usize,
    /// Path of the receiving group; empty for the tab root.
    pub path: Vec<usize>,
}

pub trait ItemTree {
    fn items(&self, tab_index: usize) -> Option<&Vec<Item>>;
    fn items_mut(&mut self, tab_index: usize) -> Option<&mut Vec<Item>>;

    /// The child list at `path`: the tab root for `[]`, otherwise a group's items.
    fn list_at(&self, tab_index: usize, path: &[usize]) -> Option<&Vec<Item>> {
        let mut list = self.items(tab_index)?;
        for &index in path {
            list = list.get(index)?.children()?;
        }
        Some(list)
    }

    fn list_at_mut(&mut self, tab_index: usize, path: &[usize]) -> Option<&mut Vec<Item>> {
        let mut list = self.items_mut(tab_index)?;
        for &index in path {
            list = list.get_mut(index)?.children_mut()?;
        }
        Some(list)
    }

    fn resolve(&self, locator: &Locator) -> Option<&Item> {
        let index = locator.index()?;
        self.list_at(locator.tab_index, locator.parent_path())?.get(index)
    }

    fn resolve_mut(&mut self, locator: &Locator) -> Option<&mut Item> {
        let index = locator.index()?;
        self.list_at_mut(locator.tab_index, locator.parent_path())?
            .get_mut(index)
    }

    fn container_of(&self, locator: &Locator) -> Option<Container<'_>> {
        let parent_path = locator.parent_path().to_vec();
        let parent = if parent_path.is_empty() {
            None
        } else {
            Some(self.resolve(&Locator::new(locator.tab_index, parent_path.clone()))?)
        };
        let list = self.list_at(locator.tab_index, &parent_path)?;
        Some(Container {
            list,
            parent,
            parent_path,
        })
    }

    /// Selecting a group inserts into it; selecting a leaf inserts beside it.
    /// Window, tab, and stale selections insert into the tab root.
    fn insertion_target(&self, tab_index: usize, selected: Option<&[usize]>) -> Option<InsertionTarget> {
        self.items(tab_index)?;
        let root = InsertionTarget {
            tab_index,
            path: Vec::new(),
        };

        let Some(path) = selected.filter(|p| !p.is_empty()) else {
            return Some(root);
        };
        let locator = Locator::new(tab_index, path.to_vec());

        match self.resolve(&locator) {
            Some(item) if item.is_group() => Some(InsertionTarget {
                tab_index,
                path: locator.path,
            }),
            Some(_) => Some(InsertionTarget {
                tab_index,
                path: locator.parent_path().to_vec(),
            }),
            None => Some(root),
        }
    }

    /// Appends `item` to the target list and returns its locator.
    fn insert(&mut self, target: &InsertionTarget, item: Item) -> Option<Locator> {
        let list = self.list_at_mut(target.tab_index, &target.path)?;
        list.push(item);
        let mut path = target.path.clone();
        path.push(list.len() - 1);
        Some(Locator::new(target.tab_index, path))
    }

    /// Deep-clones the node right after itself. Returns the clone's locator.
    fn duplicate(&mut self, locator: &Locator) -> Option<Locator> {
        let index = locator.index()?;
        let list = self.list_at_mut(locator.tab_index, locator.parent_path())?;
        let copy = list.get(index)?.clone();
        list.insert(index + 1, copy);
        Some(locator.with_index(index + 1))
    }

    /// Swaps with the neighbour in `direction`. Returns the node's new locator.
    fn move_adjacent(&mut self, locator: &Locator, direction: Direction) -> Option<Locator> {
        let index = locator.index()?;
        let list = self.list_at_mut(locator.tab_index, locator.parent_path())?;
        if index >= list.len() {
            return None;
        }
        let target = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => Some(index + 1).filter(|&i| i < list.len())?,
        };
        list.swap(index, target);
        Some(locator.with_index(target))
    }

    /// Drag reorder within one container: the node is placed before `to`,
    /// accounting for the shift caused by removing it first. Cross-tab and
    /// cross-container moves are refused.
    fn move_to(&mut self, from: &Locator, to: &Locator) -> Option<Locator> {
        if from.tab_index != to.tab_index || from.parent_path() != to.parent_path() {
            return None;
        }
        let from_index = from.index()?;
        let to_index = to.index()?;
        let list = self.list_at_mut(from.tab_index, from.parent_path())?;
        if from_index >= list.len() {
            return None;
        }

        let item = list.remove(from_index);
        let insert_index = if from_index < to_index { to_index - 1 } else { to_index };
        let insert_index = insert_index.min(list.len());
        list.insert(insert_index, item);
        Some(from.with_index(insert_index))
    }

    /// Removes and returns the node. Tabs are not deleted this way.
    fn delete(&mut self, locator: &Locator) -> Option<Item> {
        let index = locator.index()?;
        let list = self.list_at_mut(locator.tab_index, locator.parent_path())?;
        if index >= list.len() {
            return None;
        }
        Some(list.remove(index))
    }

    /// Appends an empty tab in the default section and returns its index.
    fn add_tab(&mut self) -> usize;
}

impl ItemTree for Document {
    fn items(&self, tab_index: usize) -> Option<&Vec<Item>> {
        self.tab(tab_index).map(|tab| &tab.items)
    }

    fn items_mut(&mut self, tab_index: usize) -> Option<&mut Vec<Item>> {
        self.tab_mut(tab_index).map(|tab| &mut tab.items)
    }

    fn add_tab(&mut self) -> usize {
        self.tabs.push(Tab::new("New Tab"));
        self.tabs.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windstudio_model::ItemKind;

    fn button(title: &str) -> Item {
        let mut item = Item::new(ItemKind::Button);
        if let Item::Button(b) = &mut item {
            b.title = Some(title.to_string());
        }
        item
    }

    fn titles(list: &[Item]) -> Vec<&str> {
        list.iter().map(|i| i.title().unwrap_or("-")).collect()
    }

    /// One tab: [a, group[b, c], d]
    fn nested_doc() -> Document {
        let mut doc = Document::new();
        let mut group = Item::new(ItemKind::Group);
        group.children_mut().unwrap().extend([button("b"), button("c")]);
        doc.tabs[0].items = vec![button("a"), group, button("d")];
        doc
    }

    #[test]
    fn test_resolve_descends_groups() {
        let doc = nested_doc();
        assert_eq!(doc.resolve(&Locator::new(0, vec![1, 1])).and_then(Item::title), Some("c"));
        assert!(doc.resolve(&Locator::new(0, vec![0, 0])).is_none());
        assert!(doc.resolve(&Locator::new(0, vec![7])).is_none());
        assert!(doc.resolve(&Locator::new(3, vec![0])).is_none());
        assert!(doc.resolve(&Locator::new(0, vec![])).is_none());
    }

    #[test]
    fn test_container_of() {
        let doc = nested_doc();

        let root = doc.container_of(&Locator::new(0, vec![2])).unwrap();
        assert_eq!(root.list.len(), 3);
        assert!(root.parent.is_none());

        let inner = doc.container_of(&Locator::new(0, vec![1, 0])).unwrap();
        assert_eq!(titles(inner.list), vec!["b", "c"]);
        assert!(inner.parent.is_some_and(Item::is_group));
        assert_eq!(inner.parent_path, vec![1]);

        assert!(doc.container_of(&Locator::new(0, vec![0, 0])).is_none());
    }

    #[test]
    fn test_insertion_target() {
        let doc = nested_doc();
        let target = |sel: Option<&[usize]>| doc.insertion_target(0, sel).unwrap().path;

        assert_eq!(target(None), Vec::<usize>::new());
        assert_eq!(target(Some(&[])), Vec::<usize>::new());
        assert_eq!(target(Some(&[0])), Vec::<usize>::new());
        assert_eq!(target(Some(&[1])), vec![1]);
        assert_eq!(target(Some(&[1, 0])), vec![1]);
        assert_eq!(target(Some(&[9, 9])), Vec::<usize>::new());
        assert!(doc.insertion_target(4, None).is_none());
    }

    #[test]
    fn test_move_adjacent_within_group() {
        let mut doc = nested_doc();
        let moved = doc.move_adjacent(&Locator::new(0, vec![1, 0]), Direction::Down).unwrap();
        assert_eq!(moved.path, vec![1, 1]);
        assert_eq!(titles(doc.list_at(0, &[1]).unwrap()), vec!["c", "b"]);

        assert!(doc.move_adjacent(&Locator::new(0, vec![1, 1]), Direction::Down).is_none());
        assert!(doc.move_adjacent(&Locator::new(0, vec![5]), Direction::Up).is_none());
    }

    #[test]
    fn test_delete_removes_subtree() {
        let mut doc = nested_doc();
        let removed = doc.delete(&Locator::new(0, vec![1])).unwrap();
        assert_eq!(removed.children().map(Vec::len), Some(2));
        assert_eq!(titles(&doc.tabs[0].items), vec!["a", "d"]);

        assert!(doc.delete(&Locator::new(0, vec![])).is_none());
        assert!(doc.delete(&Locator::new(0, vec![2])).is_none());
    }

    #[test]
    fn test_add_tab() {
        let mut doc = Document::new();
        let index = doc.add_tab();
        assert_eq!(index, 1);
        assert_eq!(doc.tabs[1].section, "Main");
        assert!(doc.tabs[1].items.is_empty());
    }
}

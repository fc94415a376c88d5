//! # Mutations
//!
//! Every edit the builder can make, as data.
//!
//! ## Semantics
//!
//! ### Structural edits
//! - Addressed through the current selection, resolved at apply time
//! - A guard failure (nothing selected, boundary reached, cross-container
//!   drag) is a no-op, never an error
//! - The returned selection keeps pointing at the node the user acted on
//!
//! ### SetField
//! - Parses raw panel input, stores it, then normalizes the item
//! - Invalid input is an error and leaves the stored value unchanged

use crate::selection::{Locator, Selection, SelectionLevel};
use crate::tree::{Direction, ItemTree};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use windstudio_model::{Document, FieldError, FieldInput, FieldTarget, Item, ItemKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append an empty tab and select it
    AddTab,

    /// Insert a default item of `kind` at the selection's insertion target
    AddElement { kind: ItemKind },

    /// Clone the selected item right after itself
    Duplicate,

    MoveUp,
    MoveDown,

    /// Drag reorder within one container
    MoveTo { from: Locator, to: Locator },

    /// Remove the selected item and its subtree
    Delete,

    /// Commit raw panel input to the selected window, tab, or item
    SetField { key: String, input: FieldInput },

    Select(Selection),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Field rejected: {0}")]
    Field(#[from] FieldError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The edit happened; this is the selection to show next.
    Applied(Selection),
    /// A guard failed and nothing changed.
    Noop,
}

impl Mutation {
    /// Whether applying this can change the document (as opposed to only
    /// the selection).
    pub fn touches_document(&self) -> bool {
        !matches!(self, Mutation::Select(_))
    }

    pub fn apply(&self, doc: &mut Document, selection: &Selection) -> Result<MutationOutcome, MutationError> {
        let outcome = match self {
            Mutation::AddTab => {
                let index = doc.add_tab();
                Some(Selection::tab(index))
            }

            Mutation::AddElement { kind } => Self::apply_add_element(doc, selection, *kind),

            Mutation::Duplicate => selection
                .item_locator()
                .and_then(|locator| doc.duplicate(&locator))
                .map(Selection::from),

            Mutation::MoveUp => Self::apply_move_adjacent(doc, selection, Direction::Up),
            Mutation::MoveDown => Self::apply_move_adjacent(doc, selection, Direction::Down),

            Mutation::MoveTo { from, to } => doc.move_to(from, to).map(Selection::from),

            Mutation::Delete => selection
                .item_locator()
                .and_then(|locator| doc.delete(&locator))
                .map(|_| Selection::tab(selection.tab_index)),

            Mutation::SetField { key, input } => {
                return Self::apply_set_field(doc, selection, key, input);
            }

            Mutation::Select(next) => Some(next.clone()),
        };

        Ok(outcome.map_or(MutationOutcome::Noop, MutationOutcome::Applied))
    }

    fn apply_add_element(doc: &mut Document, selection: &Selection, kind: ItemKind) -> Option<Selection> {
        let target = doc.insertion_target(selection.tab_index, selection.path.as_deref())?;
        doc.insert(&target, Item::new(kind)).map(Selection::from)
    }

    fn apply_move_adjacent(doc: &mut Document, selection: &Selection, direction: Direction) -> Option<Selection> {
        let locator = selection.item_locator()?;
        doc.move_adjacent(&locator, direction).map(Selection::from)
    }

    fn apply_set_field(
        doc: &mut Document,
        selection: &Selection,
        key: &str,
        input: &FieldInput,
    ) -> Result<MutationOutcome, MutationError> {
        let committed = match selection.level() {
            SelectionLevel::Window => {
                doc.window.commit(key, input)?;
                true
            }
            SelectionLevel::Tab => match doc.tab_mut(selection.tab_index) {
                Some(tab) => {
                    tab.commit(key, input)?;
                    true
                }
                None => false,
            },
            SelectionLevel::Item => {
                let item = selection.item_locator().and_then(|l| doc.resolve_mut(&l));
                match item {
                    Some(item) => {
                        item.commit(key, input)?;
                        true
                    }
                    None => false,
                }
            }
        };

        Ok(if committed {
            MutationOutcome::Applied(selection.clone())
        } else {
            MutationOutcome::Noop
        })
    }
}

/// Result of applying a mutation through a session
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Whether anything changed
    pub applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::SetField {
            key: "title".to_string(),
            input: FieldInput::Text("Hello".to_string()),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_mutation_json_shape() {
        let add: Mutation = serde_json::from_str(r#"{ "op": "addElement", "kind": "slider" }"#).unwrap();
        assert_eq!(add, Mutation::AddElement { kind: ItemKind::Slider });

        let select: Mutation = serde_json::from_str(r#"{ "op": "select", "tabIndex": 1, "path": [0] }"#).unwrap();
        assert_eq!(select, Mutation::Select(Selection::item(1, vec![0])));

        let toggle: Mutation =
            serde_json::from_str(r#"{ "op": "setField", "key": "locked", "input": true }"#).unwrap();
        assert_eq!(
            toggle,
            Mutation::SetField {
                key: "locked".to_string(),
                input: FieldInput::Checked(true),
            }
        );
    }

    #[test]
    fn test_guards_are_noops() {
        let mut doc = Document::new();
        let before = doc.clone();

        for mutation in [Mutation::Duplicate, Mutation::Delete, Mutation::MoveUp, Mutation::MoveDown] {
            let outcome = mutation.apply(&mut doc, &Selection::tab(0)).unwrap();
            assert_eq!(outcome, MutationOutcome::Noop);
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_invalid_field_is_an_error_and_keeps_value() {
        let mut doc = Document::new();
        let outcome = Mutation::AddElement { kind: ItemKind::Colorpicker }
            .apply(&mut doc, &Selection::tab(0))
            .unwrap();
        let MutationOutcome::Applied(selection) = outcome else {
            panic!("Expected applied outcome");
        };

        let result = Mutation::SetField {
            key: "value".to_string(),
            input: FieldInput::from("#12"),
        }
        .apply(&mut doc, &selection);

        assert!(matches!(result, Err(MutationError::Field(FieldError::Invalid { .. }))));
        assert_eq!(
            doc.tabs[0].items[0].field_value("value"),
            Some(serde_json::json!("#30ff6a"))
        );
    }

    #[test]
    fn test_set_field_on_stale_item_is_noop() {
        let mut doc = Document::new();
        let outcome = Mutation::SetField {
            key: "title".to_string(),
            input: FieldInput::from("x"),
        }
        .apply(&mut doc, &Selection::item(0, vec![4]))
        .unwrap();
        assert_eq!(outcome, MutationOutcome::Noop);
    }
}

//! # Edit Session
//!
//! One editing context: the document, what is selected, and a version
//! counter bumped on every document change. Everything the host does goes
//! through a session; there is no ambient state.

use crate::mutations::{Mutation, MutationOutcome, MutationResult};
use crate::outline::{outline, OutlineEntry};
use crate::selection::{Selection, SelectionLevel};
use crate::tree::ItemTree;
use crate::EditorError;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use windstudio_compiler_lua::{export_file, export_text, CompileOptions, ExportFile};
use windstudio_model::{Document, FieldDescriptor, FieldInput, FieldTarget, Item, Tab, TAB_FIELDS, WINDOW_FIELDS};

pub struct EditSession {
    document: Document,
    selection: Selection,
    version: u64,
    options: CompileOptions,
}

/// A field descriptor paired with the selection's current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
    #[serde(flatten)]
    pub descriptor: &'static FieldDescriptor,
    pub value: Option<Value>,
}

impl EditSession {
    /// Start editing `document`; its items are normalized first.
    pub fn new(mut document: Document) -> Self {
        document.normalize_all();
        Self {
            document,
            selection: Selection::default(),
            version: 0,
            options: CompileOptions::default(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        Ok(Self::new(Document::from_json(source)?))
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one mutation against the current selection.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let outcome = match mutation.apply(&mut self.document, &self.selection) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, ?mutation, "mutation rejected");
                return Err(e.into());
            }
        };

        let applied = match outcome {
            MutationOutcome::Applied(selection) => {
                self.selection = selection;
                if mutation.touches_document() {
                    self.version += 1;
                }
                debug!(?mutation, version = self.version, "mutation applied");
                true
            }
            MutationOutcome::Noop => {
                debug!(?mutation, "mutation was a no-op");
                false
            }
        };

        Ok(MutationResult {
            version: self.version,
            applied,
        })
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn select_window(&mut self) {
        self.selection = Selection::window(self.selection.tab_index);
    }

    pub fn select_tab(&mut self, tab_index: usize) {
        self.selection = Selection::tab(tab_index);
    }

    pub fn select_item(&mut self, tab_index: usize, path: Vec<usize>) {
        self.selection = Selection::item(tab_index, path);
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.document.tab(self.selection.tab_index)
    }

    /// The selected item, or `None` when the selection is not an item or
    /// no longer resolves.
    pub fn selected_item(&self) -> Option<&Item> {
        let locator = self.selection.item_locator()?;
        self.document.resolve(&locator)
    }

    pub fn fields_for_selection(&self) -> &'static [FieldDescriptor] {
        match self.selection.level() {
            SelectionLevel::Window => WINDOW_FIELDS,
            SelectionLevel::Tab if self.selected_tab().is_some() => TAB_FIELDS,
            SelectionLevel::Tab => &[],
            SelectionLevel::Item => self.selected_item().map(Item::fields).unwrap_or(&[]),
        }
    }

    /// Descriptors plus current values, for the property panel.
    pub fn field_states(&self) -> Vec<FieldState> {
        let value_of = |key: &str| match self.selection.level() {
            SelectionLevel::Window => self.document.window.field_value(key),
            SelectionLevel::Tab => self.selected_tab().and_then(|t| t.field_value(key)),
            SelectionLevel::Item => self.selected_item().and_then(|i| i.field_value(key)),
        };

        self.fields_for_selection()
            .iter()
            .map(|descriptor| FieldState {
                descriptor,
                value: value_of(descriptor.key),
            })
            .collect()
    }

    pub fn commit_field(&mut self, key: &str, input: FieldInput) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetField {
            key: key.to_string(),
            input,
        })
    }

    pub fn outline(&self, filter: &str) -> Vec<OutlineEntry> {
        outline(&self.document, &self.selection, filter)
    }

    pub fn export_text(&self) -> String {
        export_text(&self.document, &self.options)
    }

    pub fn export_file(&self, file_name: &str) -> ExportFile {
        export_file(&self.document, &self.options, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windstudio_model::ItemKind;

    #[test]
    fn test_session_creation() {
        let session = EditSession::new(Document::sample());

        assert_eq!(session.version(), 0);
        assert_eq!(session.selection(), &Selection::tab(0));
        assert!(session.selected_item().is_none());
        assert_eq!(session.fields_for_selection(), TAB_FIELDS);
    }

    #[test]
    fn test_version_counts_document_changes_only() {
        let mut session = EditSession::new(Document::new());

        let result = session.apply(Mutation::AddElement { kind: ItemKind::Toggle }).unwrap();
        assert_eq!(result, MutationResult { version: 1, applied: true });

        let result = session.apply(Mutation::Select(Selection::window(0))).unwrap();
        assert_eq!(result, MutationResult { version: 1, applied: true });

        let result = session.apply(Mutation::Duplicate).unwrap();
        assert_eq!(result, MutationResult { version: 1, applied: false });
    }

    #[test]
    fn test_field_states_follow_selection() {
        let mut session = EditSession::new(Document::sample());
        session.select_item(1, vec![8]);

        let states = session.field_states();
        let max = states.iter().find(|s| s.descriptor.key == "max").unwrap();
        assert_eq!(max.value, Some(serde_json::json!(100.0)));

        session.select_window();
        assert_eq!(session.fields_for_selection(), WINDOW_FIELDS);

        session.select_tab(1);
        assert_eq!(session.selected_tab().map(|t| t.title.as_str()), Some("Elements"));
        session.select_tab(7);
        assert!(session.fields_for_selection().is_empty());

        session.select_item(1, vec![99]);
        assert!(session.field_states().is_empty());
    }

    #[test]
    fn test_rejected_commit_keeps_version() {
        let mut session = EditSession::new(Document::sample());
        session.select_item(1, vec![8]);

        assert!(session.commit_field("step", FieldInput::from("-1")).is_err());
        assert_eq!(session.version(), 0);

        session.commit_field("step", FieldInput::from("5")).unwrap();
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_export_agrees_with_text() {
        let session = EditSession::new(Document::sample());
        let file = session.export_file("hub.lua");
        assert_eq!(file.file_name, "hub.lua");
        assert_eq!(file.contents, session.export_text());
    }
}

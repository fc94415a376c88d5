//! # WindStudio Editor
//!
//! Editing engine for WindStudio documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document, Item, field descriptors    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Path-addressed tree store                │
//! │  - Selection that follows edited nodes      │
//! │  - Mutations as data, guards as no-ops      │
//! │  - Structure outline                        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-lua: Document → WindUI Lua         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use windstudio_editor::{EditSession, Mutation};
//! use windstudio_model::{Document, FieldInput, ItemKind};
//!
//! let mut session = EditSession::new(Document::sample());
//!
//! session.apply(Mutation::AddElement { kind: ItemKind::Slider })?;
//! session.commit_field("max", FieldInput::from("200"))?;
//!
//! let lua = session.export_text();
//! ```

mod errors;
mod mutations;
mod outline;
mod selection;
mod session;
mod tree;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationOutcome, MutationResult};
pub use outline::{item_label, outline, OutlineEntry};
pub use selection::{Locator, Selection, SelectionLevel};
pub use session::{EditSession, FieldState};
pub use tree::{Container, Direction, InsertionTarget, ItemTree};

//! # WindStudio Model
//!
//! Document types for the WindStudio builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document → Tab → Item (→ Item ...)   │
//! │  - Defaults table per item kind             │
//! │  - Idempotent normalization after edits     │
//! │  - Field descriptors + validated commits    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: path-addressed structural edits     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-lua: Document → WindUI Lua source  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! `group` is the only item kind that owns children, so the document is a
//! plain tree of owned `Vec`s with no back references.

pub mod defaults;
pub mod document;
pub mod error;
pub mod fields;
pub mod item;
mod normalize;
pub mod validate;
pub mod value;

pub use document::{Document, Tab, Tag, WindowConfig, DEFAULT_SECTION};
pub use error::{FieldError, ModelError};
pub use fields::{FieldDescriptor, FieldInput, FieldKind, FieldTarget, TAB_FIELDS, WINDOW_FIELDS};
pub use item::*;
pub use validate::{validate, Validator};
pub use value::{Flag, Scalar};

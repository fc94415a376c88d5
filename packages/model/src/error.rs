//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),
}

/// A rejected field commit. The stored value is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("Out of range for {key}: {value}")]
    OutOfRange { key: String, value: f64 },

    #[error("Field {key} expects {expected}")]
    WrongInput { key: String, expected: &'static str },

    #[error("Rejected value for {key}: {message}")]
    Rejected { key: String, message: String },
}

//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document error: {0}")]
    Model(#[from] windstudio_model::ModelError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}

impl From<windstudio_model::FieldError> for EditorError {
    fn from(e: windstudio_model::FieldError) -> Self {
        EditorError::Mutation(e.into())
    }
}

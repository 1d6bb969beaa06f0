//! View error types

use jcheck_core::JcheckError;
use thiserror::Error;

/// Error raised while rendering templates
#[derive(Error, Debug)]
pub enum ViewError {
    /// Template loading, parsing or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// The template context could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// jcheck options were rejected
    #[error("jcheck error: {0}")]
    Jcheck(#[from] JcheckError),
}

impl ViewError {
    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

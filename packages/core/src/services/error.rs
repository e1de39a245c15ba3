//! Service Layer Error Types
//!
//! Errors returned by the record store.

use crate::models::ValidationError;
use thiserror::Error;

/// Record store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Note not found by ID
    #[error("Note not found: {id}")]
    NoteNotFound { id: i64 },

    /// Creation input failed validation
    #[error("Note validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

impl NoteServiceError {
    /// Create a note not found error
    pub fn note_not_found(id: i64) -> Self {
        Self::NoteNotFound { id }
    }
}

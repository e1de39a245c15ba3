//! Note Data Structures
//!
//! This module defines the `Note` record served by the API and the
//! `CreateNoteInput` payload accepted when a client creates one.
//!
//! # Examples
//!
//! ```rust
//! use notes_core::models::{CreateNoteInput, Note};
//!
//! let input = CreateNoteInput {
//!     title: Some("Buy milk".to_string()),
//!     ..Default::default()
//! };
//! assert!(input.validate().is_ok());
//!
//! let note = Note::from_input(5, input);
//! assert_eq!(note.id, 5);
//! assert!(!note.completed);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for Note operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A single note record.
///
/// # Fields
///
/// - `id`: Unique identifier, assigned by the store on creation
/// - `title`: Required, never empty
/// - `body`: Optional free text
/// - `user_id`: Optional owning user (`userId` on the wire)
/// - `completed`: Completion flag, `false` unless the client says otherwise
///
/// Absent optional fields are omitted from the serialized JSON rather than
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i64>,
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    /// Build a note from validated creation input and a freshly assigned id.
    ///
    /// `completed` falls back to `false` when the input leaves it unset.
    /// Callers are expected to have run [`CreateNoteInput::validate`] first;
    /// a missing title becomes an empty string here.
    pub fn from_input(id: i64, input: CreateNoteInput) -> Self {
        Self {
            user_id: input.user_id,
            id,
            title: input.title.unwrap_or_default(),
            body: input.body,
            completed: input.completed.unwrap_or(false),
        }
    }
}

/// Payload for creating a note.
///
/// Every field is optional at the type level so that a body without a
/// title still deserializes and can be rejected by [`validate`](Self::validate)
/// with a meaningful error. Unknown fields (including a client-supplied
/// `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateNoteInput {
    /// Validate the creation payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField("title")` if the title is
    /// absent or empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => Ok(()),
            _ => Err(ValidationError::MissingField("title".to_string())),
        }
    }
}

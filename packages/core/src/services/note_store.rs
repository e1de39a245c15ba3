//! In-memory note store
//!
//! `NoteStore` owns the note collection for the lifetime of whoever built
//! it: the server process, or a single test. Nothing is persisted.
//!
//! # Identifier assignment
//!
//! New notes receive `max(existing ids) + 1`, or `1` when the store is
//! empty. Ids freed by deletion are reused only if they were the maximum.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::models::{seed_notes, CreateNoteInput, Note};
use crate::services::NoteServiceError;

/// Shared handle to the note collection.
///
/// Cloning the handle does not copy the notes; all clones operate on the
/// same collection. Records are kept in insertion order.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Arc<RwLock<Vec<Note>>>,
}

impl NoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_notes(Vec::new())
    }

    /// Create a store pre-populated with `notes`
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(RwLock::new(notes)),
        }
    }

    /// Create a store holding the startup seed collection
    pub fn seeded() -> Self {
        Self::with_notes(seed_notes())
    }

    /// All notes, in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.read().clone()
    }

    /// Look up a single note
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::NoteNotFound` if no note has this id.
    pub fn get(&self, id: i64) -> Result<Note, NoteServiceError> {
        self.read()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or_else(|| NoteServiceError::note_not_found(id))
    }

    /// Validate `input`, assign the next id, and append the new note
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::ValidationFailed` if the title is missing
    /// or empty. The store is left untouched in that case.
    pub fn create(&self, input: CreateNoteInput) -> Result<Note, NoteServiceError> {
        input.validate()?;

        let mut notes = self.write();
        let id = next_id(&notes);
        let note = Note::from_input(id, input);
        notes.push(note.clone());

        debug!(id, total = notes.len(), "Created note");
        Ok(note)
    }

    /// Remove the note with `id`, if any
    ///
    /// Every other note is kept in its original order. Returns whether a
    /// note was removed.
    pub fn delete(&self, id: i64) -> bool {
        let mut notes = self.write();
        let before = notes.len();
        notes.retain(|note| note.id != id);
        let removed = notes.len() != before;

        debug!(id, removed, total = notes.len(), "Deleted note");
        removed
    }

    /// Number of notes currently held
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no notes
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-mutated, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Note>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Note>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn next_id(notes: &[Note]) -> i64 {
    notes.iter().map(|note| note.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64) -> Note {
        Note {
            user_id: None,
            id,
            title: format!("note {}", id),
            body: None,
            completed: false,
        }
    }

    #[test]
    fn test_next_id_empty_is_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_uses_maximum_not_length() {
        assert_eq!(next_id(&[note(10), note(2)]), 11);
    }

    #[test]
    fn test_clones_share_the_collection() {
        let store = NoteStore::new();
        let clone = store.clone();

        clone
            .create(CreateNoteInput {
                title: Some("shared".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_default_is_seeded() {
        assert_eq!(NoteStore::default().list(), seed_notes());
    }
}

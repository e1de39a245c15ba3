//! Integration tests for NoteStore
//!
//! Tests cover:
//! - Listing and lookup
//! - Id assignment on create
//! - Title validation
//! - Delete semantics

use anyhow::Result;
use notes_core::{seed_notes, CreateNoteInput, NoteServiceError, NoteStore, ValidationError};

fn titled(title: &str) -> CreateNoteInput {
    CreateNoteInput {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

// =========================================================================
// Read Tests
// =========================================================================

#[test]
fn test_list_returns_seed_in_insertion_order() {
    let store = NoteStore::seeded();

    let ids: Vec<i64> = store.list().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_get_existing_returns_exact_record() -> Result<()> {
    let store = NoteStore::seeded();

    let note = store.get(2)?;
    assert_eq!(note, seed_notes()[1]);
    Ok(())
}

#[test]
fn test_get_missing_is_not_found() {
    let store = NoteStore::seeded();

    assert_eq!(store.get(42), Err(NoteServiceError::NoteNotFound { id: 42 }));
}

// =========================================================================
// Create Tests
// =========================================================================

#[test]
fn test_create_assigns_max_plus_one() -> Result<()> {
    let store = NoteStore::seeded();

    let created = store.create(titled("fifth"))?;
    assert_eq!(created.id, 5);
    assert!(!created.completed);
    assert_eq!(store.get(5)?, created);
    assert_eq!(store.list().last(), Some(&created));
    Ok(())
}

#[test]
fn test_create_in_empty_store_assigns_one() -> Result<()> {
    let store = NoteStore::new();

    assert!(store.is_empty());
    let created = store.create(titled("first"))?;
    assert_eq!(created.id, 1);
    Ok(())
}

#[test]
fn test_create_keeps_optional_fields() -> Result<()> {
    let store = NoteStore::new();

    let created = store.create(CreateNoteInput {
        title: Some("full".to_string()),
        body: Some("text".to_string()),
        user_id: Some(3),
        completed: Some(true),
    })?;

    assert_eq!(created.body.as_deref(), Some("text"));
    assert_eq!(created.user_id, Some(3));
    assert!(created.completed);
    Ok(())
}

#[test]
fn test_create_without_title_fails_and_leaves_store_unchanged() {
    let store = NoteStore::seeded();

    let err = store.create(CreateNoteInput::default()).unwrap_err();
    assert_eq!(
        err,
        NoteServiceError::ValidationFailed(ValidationError::MissingField("title".to_string()))
    );
    assert_eq!(store.len(), 4);
}

#[test]
fn test_ids_stay_unique_after_deleting_maximum() -> Result<()> {
    let store = NoteStore::seeded();

    assert!(store.delete(4));
    let created = store.create(titled("replacement"))?;
    assert_eq!(created.id, 4);

    let mut ids: Vec<i64> = store.list().iter().map(|n| n.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
    Ok(())
}

// =========================================================================
// Delete Tests
// =========================================================================

#[test]
fn test_delete_removes_only_matching_record() {
    let store = NoteStore::seeded();

    assert!(store.delete(2));

    let ids: Vec<i64> = store.list().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_delete_missing_is_noop() {
    let store = NoteStore::seeded();

    assert!(!store.delete(99));
    assert_eq!(store.list(), seed_notes());
}

#[test]
fn test_stores_are_isolated() -> Result<()> {
    let first = NoteStore::seeded();
    let second = NoteStore::seeded();

    first.create(titled("only in first"))?;
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 4);
    Ok(())
}

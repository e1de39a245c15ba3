//! Business Services
//!
//! - `NoteStore` - In-memory record store with id assignment
//!
//! The store is a cheap-to-clone handle; every clone sees the same records.

pub mod error;
pub mod note_store;

pub use error::NoteServiceError;
pub use note_store::NoteStore;

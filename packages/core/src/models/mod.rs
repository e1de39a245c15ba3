//! Data Models
//!
//! - `Note` - The record type managed by the service
//! - `CreateNoteInput` - Payload accepted when creating a note
//! - `seed_notes` - The fixed collection loaded at startup

mod note;
mod seed;

pub use note::{CreateNoteInput, Note, ValidationError};
pub use seed::seed_notes;

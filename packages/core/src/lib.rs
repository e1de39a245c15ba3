//! Notes Core
//!
//! Data model and in-memory record store behind the Notes HTTP API.
//!
//! # Modules
//!
//! - [`models`] - `Note`, its creation payload, validation, and seed data
//! - [`services`] - `NoteStore`, the process-scoped record collection

pub mod models;
pub mod services;

// Re-export commonly used types
pub use models::*;
pub use services::*;

//! Notes HTTP server
//!
//! Serves the in-memory note collection from `notes-core` over a small
//! JSON API.
//!
//! # Modules
//!
//! - [`api`] - Route table, handlers, and HTTP error mapping
//! - [`config`] - Listen address configuration from the environment

pub mod api;
pub mod config;

pub use config::{ConfigError, ServerConfig};

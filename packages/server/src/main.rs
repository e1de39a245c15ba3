//! Notes API server binary
//!
//! # Usage
//!
//! ```bash
//! # Default settings (0.0.0.0:3002)
//! cargo run --bin notes-server
//!
//! # Custom port
//! PORT=8080 cargo run --bin notes-server
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: Server port (default: 3002)
//! - `HOST`: Bind address (default: 0.0.0.0)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use notes_core::NoteStore;
use notes_server::{api, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store = NoteStore::seeded();
    tracing::info!("Loaded {} seed notes", store.len());

    api::start_server(&config, store).await?;

    Ok(())
}

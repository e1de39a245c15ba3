//! HTTP API for the note collection
//!
//! # Architecture
//!
//! - `note_endpoints`: The route table and note handlers
//! - `http_error`: Status and body mapping for failures
//! - `request_logger`: Per-request log line
//!
//! Requests that match no route, or match a path but not its method, are
//! answered by [`not_found`] with 404 `{"error":"not found"}`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin notes-server
//! PORT=8080 cargo run --bin notes-server
//! ```
//!
//! # Security
//!
//! - CORS open to every origin
//! - No authentication

use axum::{http::Method, middleware, Router};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use notes_core::NoteStore;

use crate::config::ServerConfig;

mod http_error;
mod note_endpoints;
mod request_logger;

pub use http_error::{ErrorBody, HttpError, CONTENT_MISSING, ROUTE_NOT_FOUND};
pub use note_endpoints::GREETING_HTML;

/// Application state shared across all endpoints
///
/// The store is injected here rather than held in a global, so each router
/// (one per process, or one per test) owns its own collection.
#[derive(Clone)]
pub struct AppState {
    pub store: NoteStore,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(note_endpoints::routes(state))
        .fallback(not_found)
        .layer(cors_layer())
        .layer(middleware::from_fn(request_logger::log_request))
        .layer(TraceLayer::new_for_http())
}

/// Catch-all for unmatched requests
pub async fn not_found() -> HttpError {
    tracing::warn!("404");
    HttpError::RouteNotFound
}

/// Create CORS layer
///
/// Any origin may call the API. Preflights get back whatever request
/// headers they asked for. The layer sits inside the request logger so
/// preflight requests are logged too.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(false)
}

/// Start the HTTP server and run until a shutdown signal arrives
///
/// # Arguments
///
/// * `config` - Listen address
/// * `store` - Note collection to serve
///
/// # Errors
///
/// Returns error if the server fails to bind or stops unexpectedly.
pub async fn start_server(config: &ServerConfig, store: NoteStore) -> anyhow::Result<()> {
    let app = create_router(AppState::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server running in port {}", config.port);
    tracing::debug!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}

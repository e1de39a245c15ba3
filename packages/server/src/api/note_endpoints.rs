//! Note Endpoints
//!
//! # Endpoints
//!
//! - `GET /` - HTML greeting
//! - `GET /api/notes` - List all notes
//! - `POST /api/notes` - Create a note
//! - `GET /api/notes/:id` - Get a note by ID
//! - `DELETE /api/notes/:id` - Delete a note by ID
//!
//! A path that exists but is requested with another method is answered by
//! the catch-all handler, same as an unknown path.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, MethodRouter},
    Router,
};

use notes_core::{CreateNoteInput, Note};

use crate::api::{not_found, AppState, HttpError};

/// Greeting served at the root path
pub const GREETING_HTML: &str = "<h1>Hello from the Express server</h1>";

async fn index() -> Html<&'static str> {
    Html(GREETING_HTML)
}

/// List every note in insertion order
///
/// # Example
///
/// ```bash
/// curl http://localhost:3002/api/notes
/// ```
async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

/// Get a note by ID
///
/// An id that is not an integer cannot match any note and is answered with
/// 404 like any other unknown id.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3002/api/notes/1
/// ```
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, HttpError> {
    let id = parse_id(&id).ok_or(HttpError::NoteNotFound)?;
    let note = state.store.get(id)?;

    Ok(Json(note))
}

/// Create a new note
///
/// A body that is absent, is not JSON, or lacks a non-empty `title` is
/// rejected with 400 `{"error":"content missing..."}`.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3002/api/notes \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Buy milk", "body": "2 litres", "userId": 1}'
/// ```
async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), HttpError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(
            status = rejection.status().as_u16(),
            "Rejected note creation: {}",
            rejection.body_text()
        );
        HttpError::ContentMissing
    })?;

    let note = state.store.create(input).map_err(|e| {
        tracing::debug!("Rejected note creation: {}", e);
        HttpError::from(e)
    })?;

    tracing::info!(id = note.id, "Created note");

    Ok((StatusCode::CREATED, Json(note)))
}

/// Delete a note by ID
///
/// Always answers 204, whether or not a note with this id existed.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:3002/api/notes/1
/// ```
async fn delete_note(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        if state.store.delete(id) {
            tracing::info!(id, "Deleted note");
        }
    }

    StatusCode::NO_CONTENT
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn collection_routes() -> MethodRouter<AppState> {
    get(list_notes).post(create_note).fallback(not_found)
}

fn note_routes() -> MethodRouter<AppState> {
    get(get_note).delete(delete_note).fallback(not_found)
}

/// Create router with all note endpoints
///
/// Each note path is also served with a single trailing slash.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/api/notes", collection_routes())
        .route("/api/notes/", collection_routes())
        .route("/api/notes/:id", note_routes())
        .route("/api/notes/:id/", note_routes())
        .with_state(state)
}

//! HTTP error handling
//!
//! Maps store failures and routing misses onto the status codes and bodies
//! clients see.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use notes_core::NoteServiceError;

/// Body returned when a note is created without a title
pub const CONTENT_MISSING: &str = "content missing...";

/// Body returned by the catch-all handler
pub const ROUTE_NOT_FOUND: &str = "not found";

/// JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a handler can answer with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The requested note does not exist (404, empty body)
    NoteNotFound,
    /// Creation input was missing its title (400, JSON body)
    ContentMissing,
    /// No route matched the request (404, JSON body)
    RouteNotFound,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NoteNotFound | HttpError::RouteNotFound => StatusCode::NOT_FOUND,
            HttpError::ContentMissing => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::NoteNotFound => return status.into_response(),
            HttpError::ContentMissing => CONTENT_MISSING,
            HttpError::RouteNotFound => ROUTE_NOT_FOUND,
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<NoteServiceError> for HttpError {
    fn from(err: NoteServiceError) -> Self {
        match err {
            NoteServiceError::NoteNotFound { .. } => HttpError::NoteNotFound,
            NoteServiceError::ValidationFailed(_) => HttpError::ContentMissing,
        }
    }
}

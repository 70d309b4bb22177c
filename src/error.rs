//! Error types for the hawaii-climate application.
//!
//! Every fallible operation in the crate returns [`ClimateError`]. Handlers
//! turn it into a `500` JSON body; an empty query result is never an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// The main error type for hawaii-climate operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Database driver errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The database file does not carry the expected tables
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// Build the JSON error response, tagged with the request that failed.
    ///
    /// Every error that reaches a handler is a server-side failure, so the
    /// status is always `500`.
    pub fn into_response_with_id(self, request_id: &str) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": self.to_string(),
                "request_id": request_id,
            })),
        )
            .into_response()
    }
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;

//! HTTP error mapping.
//!
//! Every failure leaves a handler as `{"error": <message>, "code": <CODE>}`.
//! Client mistakes keep their message; anything that points at the server
//! (database faults, I/O, delivery) is logged in full and answered with a
//! fixed text so paths, SQL and credentials never reach visitors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vitrine_core::error::CoreError;

/// Reply text for every 5xx.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error returned by handlers and extractors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure from `vitrine_core` (missing content, bad input,
    /// read-only content, oversize upload, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Query failure from the content store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request that could not be read: malformed JSON, bad path
    /// parameter, broken multipart body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure; the message is only logged.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Handler return type.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and visitor-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::PayloadTooLarge(msg) => {
            (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Domain invariant broken");
            internal()
        }
    }
}

/// A missing row is a 404 and a clash on a `uq_*` index (a second active
/// video, for instance) is a 409. Everything else is a server fault.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Requested content does not exist".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or_default();
        if db_err.is_unique_violation() && constraint.starts_with("uq_") {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Value already taken ({constraint})"),
            );
        }
    }

    tracing::error!(error = %err, "Content store query failed");
    internal()
}

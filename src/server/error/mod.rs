//! Error types for the Roastmap server application.
//!
//! Domain failures live in [`user::UserError`], startup configuration failures in
//! [`config::ConfigError`]. Everything else (database, push dispatch, I/O) is an internal
//! error. [`Error`] implements `IntoResponse` so controllers can return it directly.

pub mod config;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::user::UserError,
};

/// Main error type for the Roastmap server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Request could not be served for a domain reason (validation, conflict, not found).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Push dispatch failed (credentials, token exchange, transport, FCM rejection).
    #[error("Failed to send notification: {0}")]
    PushError(#[from] push::Error),
    /// Database error not yet attributed to an operation, see [`Error::during`].
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),
    /// Database error raised while performing `operation`.
    #[error("{operation}: {source}")]
    OperationFailed {
        operation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing or empty required fields, or a body that does not parse
/// - 404 Not Found - No account for the Firebase UID
/// - 409 Conflict - Username, identity or favorite already exists
/// - 500 Internal Server Error - Everything else, with the underlying message echoed
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

impl Error {
    /// Attaches the failing operation to a database error, leaving other errors unchanged.
    pub fn during(self, operation: &'static str) -> Self {
        match self {
            Self::DbErr(source) => Self::OperationFailed { operation, source },
            err => err,
        }
    }
}

/// Builds a JSON error response.
pub fn error_response(status: StatusCode, code: ErrorCode, error: String) -> Response {
    (status, Json(ErrorDto { error, code })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The message is logged and echoed to the caller so the mobile client can surface it.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();

        tracing::error!("{}", message);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            message,
        )
    }
}

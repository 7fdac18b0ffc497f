use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::ErrorCode,
    server::error::{error_response, InternalServerError},
};

#[derive(Error, Debug)]
pub enum UserError {
    /// Required request fields were missing or empty; carries the message shown to the client.
    #[error("{0}")]
    MissingFields(&'static str),
    /// Body or query string could not be read into the expected shape.
    #[error("Invalid request: {0}")]
    MalformedRequest(String),
    #[error("Username already exists.")]
    UsernameTaken,
    #[error("An account is already registered for this Firebase UID.")]
    IdentityTaken,
    #[error("This coffee shop is already in your favorites.")]
    FavoriteExists,
    #[error("User not found.")]
    AccountNotFound,
    /// Stored account has an empty username, which registration never allows.
    #[error("Username is empty for the user.")]
    EmptyUsername(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFields(_) | Self::MalformedRequest(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    self.to_string(),
                )
            }
            Self::UsernameTaken | Self::IdentityTaken | Self::FavoriteExists => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, ErrorCode::Conflict, self.to_string())
            }
            Self::AccountNotFound => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, self.to_string())
            }
            Self::EmptyUsername(account_id) => {
                tracing::warn!(account_id = %account_id, "Account has an empty username");

                InternalServerError(self).into_response()
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable classification of an API error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required field was missing or empty
    ValidationError,
    /// The request would violate a uniqueness constraint
    Conflict,
    /// No account matches the provided Firebase UID
    NotFound,
    /// Unexpected failure in storage or push dispatch
    InternalError,
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    pub code: ErrorCode,
}

/// Generic success response carrying a human readable message
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

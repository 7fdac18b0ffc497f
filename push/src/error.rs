use thiserror::Error;

/// Errors returned while authenticating with or sending to Firebase Cloud Messaging.
#[derive(Error, Debug)]
pub enum Error {
    /// The service account credentials file could not be read.
    #[error("Failed to read service account credentials: {0}")]
    CredentialsIo(#[from] std::io::Error),
    /// The service account credentials are not valid JSON or miss required fields.
    #[error("Invalid service account credentials: {0}")]
    CredentialsParse(#[from] serde_json::Error),
    /// The service account private key could not be loaded or the assertion could not be signed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    /// Transport error talking to the token endpoint or the FCM API.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The OAuth2 token endpoint refused the JWT-bearer assertion.
    #[error("Access token request rejected with status {status}: {message}")]
    TokenRejected { status: u16, message: String },
    /// FCM refused the message.
    #[error("FCM rejected message with status {status}: {message}")]
    Api { status: u16, message: String },
    /// A required builder field was never set.
    #[error("Missing required client configuration: {0}")]
    MissingConfig(&'static str),
}

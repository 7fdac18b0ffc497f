//! Firebase Cloud Messaging HTTP v1 client.
//!
//! Authenticates with a Google service account using the OAuth2 JWT-bearer grant, caches the
//! resulting access token, and sends messages to individual device registration tokens.
//!
//! ```no_run
//! use push::{Client, PushRequest, RenderMode, ServiceAccountKey};
//!
//! # async fn example() -> Result<(), push::Error> {
//! let key = ServiceAccountKey::from_file("service-account.json")?;
//! let client = Client::builder().service_account(key).build()?;
//!
//! let request = PushRequest {
//!     token: "device-token".to_string(),
//!     title: "New roaster nearby".to_string(),
//!     body: "Check it out".to_string(),
//!     ..Default::default()
//! };
//! let name = client.send(&request.render(RenderMode::Notification)).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod message;

pub use client::{Client, ClientBuilder, DEFAULT_API_URL};
pub use credentials::ServiceAccountKey;
pub use error::Error;
pub use message::{Message, NotificationAction, NotificationEnvelope, PushRequest, RenderMode};

#[cfg(test)]
mod testing;

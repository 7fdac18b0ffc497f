//! HTTP controller endpoints for the Roastmap API.
//!
//! Controllers are Axum handlers that extract the request, hand it to a service, and map the
//! outcome to a JSON response. Every handler carries a utoipa path annotation so it shows up in
//! the generated OpenAPI document.

pub mod extract;
pub mod notification;
pub mod user;

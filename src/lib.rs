//! Backend for a coffee shop discovery app.
//!
//! Clients register a username against their Firebase UID, save favorite venues, post reviews,
//! and ask the server to push notifications to a device through Firebase Cloud Messaging.

pub mod model;
pub mod server;

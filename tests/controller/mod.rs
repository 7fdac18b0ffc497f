//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted state and payloads, verifying status codes and
//! response bodies for each endpoint.

mod notification;
mod user;

use axum::{body::to_bytes, response::Response};
use roastmap_test_utils::prelude::*;
use serde_json::Value;

/// Reads a response body as JSON.
async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

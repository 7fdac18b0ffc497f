//! Test configuration constants for the mock FCM client.
//!
//! These are placeholder values, not real credentials.

/// Firebase project ID of the mock service account.
///
/// Determines the send path on the mock server: `/v1/projects/{TEST_PROJECT_ID}/messages:send`.
pub static TEST_PROJECT_ID: &str = "roastmap-test";

/// Client email of the mock service account.
pub static TEST_CLIENT_EMAIL: &str = "firebase-adminsdk@roastmap-test.iam.gserviceaccount.com";

/// Access token issued by the mock token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Path of the mock OAuth2 token endpoint.
pub static TEST_TOKEN_PATH: &str = "/token";

/// User agent sent by the mock FCM client.
pub static TEST_USER_AGENT: &str = "roastmap-tests/1.0";

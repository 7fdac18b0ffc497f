//! FCM HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_PROJECT_ID, TEST_TOKEN_PATH},
    TestSetup,
};

impl TestSetup {
    pub fn push<'a>(&'a mut self) -> PushFixtures<'a> {
        PushFixtures { setup: self }
    }
}

pub struct PushFixtures<'a> {
    setup: &'a mut TestSetup,
}

/// Path the mock FCM client sends messages to.
pub fn send_path() -> String {
    format!("/v1/projects/{}/messages:send", TEST_PROJECT_ID)
}

/// Message name returned by a successful mock send.
pub fn mock_message_name() -> String {
    format!("projects/{}/messages/0:1700000000000000", TEST_PROJECT_ID)
}

impl<'a> PushFixtures<'a> {
    /// Create a mock OAuth2 token endpoint issuing [`TEST_ACCESS_TOKEN`].
    ///
    /// # Arguments
    /// - `expected_requests` - Number of token exchanges the test expects
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "access_token": TEST_ACCESS_TOKEN,
            "expires_in": 3600,
            "token_type": "Bearer",
        });

        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `messages:send` endpoint that accepts messages matching `message`.
    ///
    /// # Arguments
    /// - `message` - JSON the `message` object must contain (partial match)
    /// - `expected_requests` - Number of sends the test expects
    pub fn create_send_endpoint(
        &mut self,
        message: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({ "name": mock_message_name() });

        self.setup
            .server
            .mock("POST", send_path().as_str())
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_ACCESS_TOKEN).as_str(),
            )
            .match_body(Matcher::PartialJson(
                serde_json::json!({ "message": message }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `messages:send` endpoint that fails with `status`.
    pub fn create_failing_send_endpoint(&mut self, status: usize) -> Mock {
        let body = serde_json::json!({
            "error": { "code": status, "message": "Requested entity was not found.", "status": "NOT_FOUND" }
        });

        self.setup
            .server
            .mock("POST", send_path().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}

//! Mock service account credentials.

use openssl::rsa::Rsa;

use crate::constant::{TEST_CLIENT_EMAIL, TEST_PROJECT_ID, TEST_TOKEN_PATH};

/// Create a service account key signed by a freshly generated RSA key.
///
/// The key's `token_uri` points at the mock server so token exchanges can be mocked with
/// [`PushFixtures::create_token_endpoint`](crate::fixtures::push::PushFixtures::create_token_endpoint).
///
/// # Arguments
/// - `server_url` - Base URL of the mockito server
///
/// # Returns
/// - `ServiceAccountKey` - Credentials usable with `push::Client::builder()`
pub fn mock_service_account(server_url: &str) -> push::ServiceAccountKey {
    let rsa = Rsa::generate(2048).expect("Failed to generate RSA key");
    let private_pem = rsa
        .private_key_to_pem()
        .expect("Failed to encode RSA private key");

    push::ServiceAccountKey {
        project_id: TEST_PROJECT_ID.to_string(),
        client_email: TEST_CLIENT_EMAIL.to_string(),
        private_key: String::from_utf8(private_pem).expect("PEM is valid UTF-8"),
        token_uri: format!("{}{}", server_url, TEST_TOKEN_PATH),
    }
}

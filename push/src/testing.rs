use mockito::{Mock, ServerGuard};
use openssl::rsa::Rsa;

use crate::credentials::ServiceAccountKey;

pub static TEST_PROJECT_ID: &str = "roastmap-test";

/// Builds a service account backed by a freshly generated RSA key whose token endpoint
/// lives on the mock server. Returns the key and the matching public key PEM.
pub fn mock_service_account(server_url: &str) -> (ServiceAccountKey, Vec<u8>) {
    let rsa = Rsa::generate(2048).unwrap();
    let private_pem = rsa.private_key_to_pem().unwrap();
    let public_pem = rsa.public_key_to_pem().unwrap();

    let key = ServiceAccountKey {
        project_id: TEST_PROJECT_ID.to_string(),
        client_email: format!("firebase-adminsdk@{}.iam.gserviceaccount.com", TEST_PROJECT_ID),
        private_key: String::from_utf8(private_pem).unwrap(),
        token_uri: format!("{}/token", server_url),
    };

    (key, public_pem)
}

pub async fn token_endpoint(
    server: &mut ServerGuard,
    access_token: &str,
    expires_in: i64,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"{}","expires_in":{},"token_type":"Bearer"}}"#,
            access_token, expires_in
        ))
        .expect(expected_requests)
        .create_async()
        .await
}

//! OAuth2 access tokens for the FCM API.
//!
//! Tokens are obtained with the JWT-bearer grant: an RS256 assertion signed with the service
//! account's private key is exchanged at the key's `token_uri`. The token is cached and reused
//! until shortly before it expires.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{credentials::ServiceAccountKey, error::Error};

pub static FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
static JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each signed assertion in seconds, Google caps this at one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Cached tokens are refreshed this many seconds before they expire.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Clone, Debug)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - TimeDelta::seconds(REFRESH_MARGIN_SECS) > now
    }
}

/// Issues and caches access tokens for a single service account.
pub struct TokenProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cache: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    /// Loads the service account private key; fails if it is not a valid RSA PEM.
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;

        Ok(Self {
            key,
            encoding_key,
            http,
            cache: Mutex::new(None),
        })
    }

    /// Returns a valid access token, exchanging a new assertion if the cached one is stale.
    ///
    /// The cache lock is held across the exchange so concurrent callers share one refresh.
    pub async fn access_token(&self) -> Result<String, Error> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.exchange().await?;
        let value = token.value.clone();
        *cache = Some(token);

        Ok(value)
    }

    fn sign_assertion(&self, issued_at: DateTime<Utc>) -> Result<String, Error> {
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: FIREBASE_MESSAGING_SCOPE,
            aud: &self.key.token_uri,
            iat: issued_at.timestamp(),
            exp: (issued_at + TimeDelta::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        };

        let assertion =
            jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        Ok(assertion)
    }

    async fn exchange(&self) -> Result<CachedToken, Error> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(Error::TokenRejected {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response.json().await?;

        tracing::debug!(
            client_email = %self.key.client_email,
            expires_in = token.expires_in,
            "Obtained FCM access token"
        );

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + TimeDelta::seconds(token.expires_in),
        })
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    auth::TokenProvider, credentials::ServiceAccountKey, error::Error, message::Message,
};

/// Production FCM endpoint.
pub static DEFAULT_API_URL: &str = "https://fcm.googleapis.com";

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a Message,
}

#[derive(Deserialize)]
struct SendResponse {
    name: String,
}

/// Client for the FCM HTTP v1 `messages:send` API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cached access token.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    project_id: String,
    tokens: Arc<TokenProvider>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The Firebase project messages are sent through.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Sends a message and returns the name FCM assigned to it
    /// (`projects/{project_id}/messages/{message_id}`).
    ///
    /// FCM's acknowledgment is the only delivery confirmation; the call is not retried.
    pub async fn send(&self, message: &Message) -> Result<String, Error> {
        let access_token = self.tokens.access_token().await?;

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.api_url, self.project_id
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(access_token)
            .json(&SendRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response.json().await?;

        tracing::debug!(message_name = %sent.name, "FCM accepted message");

        Ok(sent.name)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    service_account: Option<ServiceAccountKey>,
    api_url: String,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            service_account: None,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: None,
        }
    }

    /// Credentials used to sign token requests; required.
    pub fn service_account(mut self, key: ServiceAccountKey) -> Self {
        self.service_account = Some(key);
        self
    }

    /// Overrides the FCM base URL, defaults to [`DEFAULT_API_URL`].
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let key = self
            .service_account
            .ok_or(Error::MissingConfig("service_account"))?;

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }
        let http = http.build()?;

        let project_id = key.project_id.clone();
        let tokens = TokenProvider::new(key, http.clone())?;

        Ok(Client {
            http,
            api_url: self.api_url,
            project_id,
            tokens: Arc::new(tokens),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

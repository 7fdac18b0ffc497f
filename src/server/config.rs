//! Environment configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration resolved from environment variables at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Path to the Firebase service account JSON key (`FCM_CREDENTIALS_PATH`)
    pub fcm_credentials_path: String,
    /// FCM base URL (`FCM_API_URL`), defaults to the production endpoint
    pub fcm_api_url: String,
    /// Address the HTTP server binds to (`SERVER_ADDRESS`)
    pub server_address: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar(var))
        };

        let server_address = lookup("SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_address = server_address.parse::<SocketAddr>().map_err(|source| {
            ConfigError::InvalidServerAddress {
                value: server_address.clone(),
                source,
            }
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            fcm_credentials_path: required("FCM_CREDENTIALS_PATH")?,
            fcm_api_url: lookup("FCM_API_URL").unwrap_or_else(|| push::DEFAULT_API_URL.to_string()),
            server_address,
        })
    }
}

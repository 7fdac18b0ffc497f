use thiserror::Error;

/// Environment configuration could not be resolved at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnvVar(&'static str),
    #[error("SERVER_ADDRESS `{value}` is not a socket address: {source}")]
    InvalidServerAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

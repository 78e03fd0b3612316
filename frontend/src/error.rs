//! Error types for the dashboard client and its page configuration.
use thiserror::Error;

/// Failure of one of the dashboard's backend requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be built or sent, or the connection failed
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    /// The response body was not the expected JSON
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Failure reading the page-embedded configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed dashboard config: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;

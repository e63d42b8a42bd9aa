//! Error types for the reqwest transport.

use thiserror::Error;

/// Result type alias for reqwest transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reqwest transport operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a complete response was received.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<Error> for estate_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                // Request URLs carry API keys in their query strings.
                let e = e.without_url();
                let message = if e.is_timeout() {
                    "Request timed out".to_owned()
                } else if e.is_connect() {
                    "Connection failed".to_owned()
                } else {
                    e.to_string()
                };

                estate_core::Error::transport()
                    .with_message(message)
                    .with_source(e)
            }
        }
    }
}

//! Error types for gateway operations

/// Errors from gateway client construction and calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The gateway rejected the call. Carries the remote `error` message or,
    /// failing that, the remote `code`, verbatim.
    #[error("{0}")]
    Gateway(String),

    /// Transport or body-decoding failure from the HTTP client, unmapped.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// The remote message for a gateway rejection, `None` for every other kind.
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            Error::Gateway(message) => Some(message),
            _ => None,
        }
    }
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors produced by Crypto Pay client operations
#[derive(Debug, Error)]
pub enum Error {
    /// The path/query combination could not form a valid request
    #[error("error while creating a request: {0}")]
    RequestConstruction(String),

    /// The HTTP exchange could not be completed (connect, DNS, TLS,
    /// proxy or timeout failure)
    #[error("error while performing a request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be fully drained
    #[error("error while reading a response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The response bytes are not valid JSON for the requested shape
    #[error("error while decoding a response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Mono client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Mono API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// A required field was missing or empty before the request was sent.
    #[error("invalid request: {0}")]
    ValidationError(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Mono HTTP APIs error.
///
/// Mono does not document a structured error body, so only the HTTP status
/// line is captured: the response body of a failed request is never parsed.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Canonical reason phrase for the status code.
    pub reason: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mono API request failed with status {}: {}",
            self.status, self.reason
        )
    }
}

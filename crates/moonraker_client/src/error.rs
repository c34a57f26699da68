//! Error types for the Moonraker transport.

use reqwest::StatusCode;
use thiserror::Error;

/// [MoonrakerError] represents the errors that can occur when talking to a Moonraker server.
#[derive(Error, Debug)]
pub enum MoonrakerError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never produced a response: refused, unresolved, timed out, reset.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{status} for url ({url})")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read or was not valid JSON.
    #[error("invalid response body from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl MoonrakerError {
    /// Returns the HTTP status carried by this error, if the server responded at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            MoonrakerError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Moonraker transport operations.
pub type Result<T> = std::result::Result<T, MoonrakerError>;

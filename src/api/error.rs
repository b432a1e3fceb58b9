use thiserror::Error;

/// Errors from the catalog HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL could not be combined with the endpoint path
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS or timeout failure
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned {status}")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request never left the UI: the worker queue rejected it
    #[error("Request could not be queued: {reason}")]
    Dispatch { reason: String },
}

impl ApiError {
    /// True for a 404, which the detail screen renders as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

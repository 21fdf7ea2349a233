//! HTTP adapter error types.

use meterdash_domain::error::MeterDashError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL cannot carry endpoint paths.
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    /// Sending the request or reading the body failed.
    #[error("request to the metering backend failed")]
    Request(#[source] reqwest::Error),

    /// The body was neither the expected payload nor an error reply.
    #[error("failed to decode backend reply (status {status})")]
    Decode {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl From<HttpError> for MeterDashError {
    fn from(err: HttpError) -> Self {
        MeterDashError::transport(err)
    }
}

//! Error types for the Ardoq client.
//!
//! # Design
//! Failures are not normalized. A response that is not exactly `200 OK`
//! comes back as `Status` holding the raw `HttpResponse`; transport and JSON
//! failures pass through with their own source errors. Callers match on the
//! variant to tell them apart.

use crate::http::HttpResponse;

/// Errors returned by `ArdoqClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with anything other than `200 OK`, including
    /// other 2xx codes.
    #[error("HTTP {} {}", .0.status, .0.status_text)]
    Status(HttpResponse),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// A `200 OK` body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// The raw response for `Status` failures.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::Status(response) => Some(response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}

/// Errors raised by a `Transport` before any response is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    /// DNS failure, refused connection, or a broken stream.
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

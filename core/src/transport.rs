//! The I/O half of a dispatch.
//!
//! # Design
//! `ArdoqClient` never opens sockets itself. It hands a finished `HttpRequest`
//! to a `Transport` and gets back an `HttpResponse` for every status code,
//! including 4xx/5xx. Status interpretation stays in the client. Only failures
//! that produce no response at all become `TransportError`.
//!
//! `UreqTransport` is the default backend. ureq is blocking, so each round-trip
//! runs on tokio's blocking pool and `send` must be awaited inside a tokio
//! runtime. Response bodies are read in full with no size cap, since listings
//! are unpaginated.

use std::future::Future;
use std::time::Duration;

use ureq::http;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// A `Transport` backed by a [`ureq::Agent`].
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Fails any request that takes longer than `timeout` end to end.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || round_trip(&agent, request))
            .await
            .map_err(|e| TransportError::Other(Box::new(e)))?
    }
}

fn round_trip(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = http::Request::builder()
        .method(request.method.as_str())
        .uri(&request.url);

    // `header` appends, so repeated names all go out on the wire.
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let result = match request.body {
        Some(body) => {
            let req = builder
                .body(body.into_bytes())
                .map_err(|e| TransportError::Other(Box::new(e)))?;
            agent.run(req)
        }
        None => {
            let req = builder
                .body(())
                .map_err(|e| TransportError::Other(Box::new(e)))?;
            agent.run(req)
        }
    };

    convert_response(result.map_err(map_ureq_error)?)
}

fn convert_response(
    response: http::Response<ureq::Body>,
) -> Result<HttpResponse, TransportError> {
    let (parts, mut body) = response.into_parts();

    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = body
        .with_config()
        .limit(u64::MAX)
        .read_to_string()
        .map_err(map_ureq_error)?;

    Ok(HttpResponse {
        status: parts.status.as_u16(),
        status_text: status_text(parts.status),
        headers,
        body,
    })
}

/// ureq does not expose the reason phrase from the status line, so this is
/// the registered phrase for the code, or empty for unregistered codes.
fn status_text(status: http::StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

fn map_ureq_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::HostNotFound => TransportError::Connection("host not found".to_owned()),
        ureq::Error::Io(e) => TransportError::Connection(e.to_string()),
        e => TransportError::Other(Box::new(e)),
    }
}

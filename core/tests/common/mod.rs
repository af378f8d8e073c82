//! In-memory transports for exercising `ArdoqClient` without a server.

#![allow(dead_code)]

use std::sync::Mutex;

use ardoq_core::{ArdoqClient, HttpRequest, HttpResponse, Transport, TransportError};

pub const BASE: &str = "https://example.ardoq.test";
pub const TOKEN: &str = "t0k3n";

/// Records every request and answers each one with the same canned response.
pub struct Recorder {
    reply: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Recorder {
    pub fn replying(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            reply: HttpResponse {
                status,
                status_text: status_text.to_string(),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::replying(200, "OK", body)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent so far.
    pub fn single(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for Recorder {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

/// Fails every request before a response exists.
pub struct Unreachable;

impl Transport for Unreachable {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Connection("connection refused".to_string()))
    }
}

pub fn client(transport: Recorder) -> ArdoqClient<Recorder> {
    ArdoqClient::with_transport(TOKEN, BASE, transport)
}

/// Asserts the two headers the client always appends are present.
pub fn assert_injected_headers(req: &HttpRequest) {
    assert!(
        req.header_values("content-type").any(|v| v == "application/json"),
        "missing injected content-type in {:?}",
        req.headers
    );
    let expected = format!("Token token={TOKEN}");
    assert!(
        req.header_values("authorization").any(|v| v == expected),
        "missing injected authorization in {:?}",
        req.headers
    );
}

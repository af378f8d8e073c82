//! Request dispatcher for the Ardoq API.
//!
//! # Design
//! `ArdoqClient` holds an access token, a base path, and a transport, none of
//! which change after construction. A dispatch is three steps:
//!
//! 1. `build_request` resolves the URL, method, and headers (pure).
//! 2. The `Transport` performs the round-trip (the only I/O).
//! 3. `parse_response` turns exactly `200 OK` into JSON and everything else
//!    into `ApiError::Status` (pure).
//!
//! Keeping 1 and 3 free of I/O lets tests check request shapes and status
//! handling without a server.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, RequestOptions};
use crate::query::encode_query;
use crate::transport::{Transport, UreqTransport};

const AUTH_SCHEME: &str = "Token token=";

/// Client for the Ardoq REST API.
#[derive(Debug, Clone)]
pub struct ArdoqClient<T = UreqTransport> {
    access_token: String,
    base_path: String,
    transport: T,
}

impl ArdoqClient<UreqTransport> {
    /// Client using the default ureq transport.
    pub fn new(access_token: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self::with_transport(access_token, base_path, UreqTransport::new())
    }
}

impl<T> ArdoqClient<T> {
    /// `base_path` is used verbatim; `/api/` is appended directly to it.
    pub fn with_transport(
        access_token: impl Into<String>,
        base_path: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            base_path: base_path.into(),
            transport,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `endpoint`, `options`, and `params` into a wire request.
    ///
    /// Caller headers are kept as given; `Content-Type: application/json` and
    /// the token `Authorization` header are then appended, even when the
    /// caller already set either one.
    pub fn build_request(
        &self,
        endpoint: &str,
        options: RequestOptions,
        params: &[(&str, &str)],
    ) -> HttpRequest {
        let mut url = format!("{}/api/{}", self.base_path, endpoint);
        let query = encode_query(params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = options.headers;
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        headers.push((
            "Authorization".to_string(),
            format!("{AUTH_SCHEME}{}", self.access_token),
        ));

        HttpRequest {
            method: options.method.unwrap_or_default(),
            url,
            headers,
            body: options.body,
        }
    }

    /// Accept only a successful `200 OK`; any other status, 2xx included,
    /// is returned as `ApiError::Status` with the response untouched.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if response.is_success() && response.status == 200 {
            return serde_json::from_str(&response.body).map_err(ApiError::Deserialization);
        }
        Err(ApiError::Status(response))
    }
}

impl<T: Transport> ArdoqClient<T> {
    /// Send one request to `/api/{endpoint}` and return the JSON body.
    pub async fn dispatch(
        &self,
        endpoint: &str,
        options: RequestOptions,
        params: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let request = self.build_request(endpoint, options, params);
        tracing::debug!(method = %request.method, url = %request.url, "dispatching");

        let method = request.method;
        let url = request.url.clone();
        let header_names: Vec<String> = request.headers.iter().map(|(n, _)| n.clone()).collect();
        let body_len = request.body.as_ref().map(String::len);

        let response = self.transport.send(request).await?;
        let result = self.parse_response(response);

        if let Err(ApiError::Status(response)) = &result {
            tracing::debug!(%method, %url, headers = ?header_names, ?body_len, "request rejected");
            tracing::error!(
                status = response.status,
                status_text = %response.status_text,
                "fetch error"
            );
        }
        result
    }
}

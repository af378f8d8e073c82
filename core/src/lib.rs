//! Async client for the Ardoq REST API.
//!
//! # Overview
//! Covers the three managed element kinds (workspaces, components,
//! references). Every operation resolves to one HTTP call against
//! `{base_path}/api/{endpoint}` and yields the response JSON as an opaque
//! `serde_json::Value`.
//!
//! # Design
//! - `ArdoqClient` holds only the access token, the base path, and a
//!   `Transport`; all three are fixed at construction.
//! - `build_request` and `parse_response` are pure. The `Transport` does the
//!   I/O in between, so request shapes are testable without a server.
//! - Only a successful `200 OK` resolves. Every other status, 201 and 204
//!   included, is an `ApiError::Status` carrying the raw response.
//! - The client adds `Content-Type` and `Authorization` after caller headers
//!   without removing duplicates.
//! - No retries, paging, caching, or timeouts beyond what the transport
//!   itself is configured with.

pub mod client;
pub mod element;
pub mod error;
pub mod http;
mod operations;
pub mod query;
pub mod transport;

pub use client::ArdoqClient;
pub use element::{ElementRef, FieldQuery, ManagedElement, ParseElementError};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use transport::{Transport, UreqTransport};

//! HTTP Transport Port - Outbound Request Interface
//!
//! Defines the trait the API client uses to put a fully-built request on
//! the wire. The exchange gates plain programmatic clients, so the concrete
//! transport (browser-profile reqwest, or anything able to impersonate a
//! browser fingerprint) lives in the adapters layer.
//!
//! Requests and responses are plain data: the client does all header and
//! body construction, the transport only sends bytes and returns bytes.

use std::fmt;

use async_trait::async_trait;

/// HTTP verbs used by the futures API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
  /// Read-only queries (contract detail, account assets).
  Get,
  /// Mutating actions (order create/cancel/change, position close).
  Post,
}

impl fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HttpMethod::Get => f.write_str("GET"),
      HttpMethod::Post => f.write_str("POST"),
    }
  }
}

/// A fully-built outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
  /// HTTP verb.
  pub method: HttpMethod,
  /// Absolute URL.
  pub url: String,
  /// Header name/value pairs, in insertion order.
  pub headers: Vec<(String, String)>,
  /// Raw JSON body. `None` for GET requests.
  pub body: Option<String>,
}

impl HttpRequest {
  /// Case-insensitive header lookup.
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }
}

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  /// HTTP status code.
  pub status: u16,
  /// Undecoded response body.
  pub body: String,
}

impl HttpResponse {
  /// Whether the status is in the 2xx range.
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Trait for HTTP transports.
///
/// Implementors send exactly one request per call. No retries, no
/// status interpretation: a non-2xx response is still `Ok`.
///
/// # Errors
/// Returns error only for transport-level failures (DNS, connect, TLS,
/// timeout, body read).
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
  /// Send the request and return the raw response.
  async fn execute(&self, request: HttpRequest) -> anyhow::Result<HttpResponse>;
}

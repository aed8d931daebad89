//! Futures HTTP Client - Signed REST Request Core
//!
//! Builds authenticated requests for the MEXC futures web API and hands
//! them to an `HttpTransport`. One request per call: no retries, no
//! backoff, no status interpretation. Responses are decoded as JSON and
//! returned verbatim; exchange error codes pass through unexamined.
//!
//! Endpoint operations live in `orders` (mutating) and `account`
//! (read-only) as further `impl MexcClient` blocks.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::auth::{MexcSigner, SignatureResult};
use crate::ports::transport::{HttpMethod, HttpRequest, HttpTransport};

/// Production futures web host.
pub const DEFAULT_BASE_URL: &str = "https://futures.mexc.com";

/// Signature header.
pub const SIGN_HEADER: &str = "x-mxc-sign";
/// Nonce (timestamp) header.
pub const NONCE_HEADER: &str = "x-mxc-nonce";

/// Configuration for the futures client.
#[derive(Debug, Clone)]
pub struct MexcClientConfig {
  /// Scheme + host, without trailing path.
  pub base_url: String,
}

impl Default for MexcClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

/// Stateless client for the futures private API.
///
/// Credentials are passed per call and never stored. Safe to share
/// behind an `Arc` across tasks.
pub struct MexcClient {
  /// Outbound HTTP transport.
  transport: Arc<dyn HttpTransport>,
  /// Request signer.
  signer: MexcSigner,
  /// Client configuration.
  config: MexcClientConfig,
}

impl MexcClient {
  /// Create a client signing with the system clock.
  pub fn new(transport: Arc<dyn HttpTransport>, config: MexcClientConfig) -> Self {
    Self {
      transport,
      signer: MexcSigner::new(),
      config,
    }
  }

  /// Replace the signer (e.g. one bound to a fixed clock).
  pub fn with_signer(mut self, signer: MexcSigner) -> Self {
    self.signer = signer;
    self
  }

  /// Client configuration.
  pub fn config(&self) -> &MexcClientConfig {
    &self.config
  }

  /// Absolute URL for an API path.
  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Sign `body` and POST exactly the signed bytes.
  pub(crate) async fn signed_post<T>(&self, key: &str, path: &str, body: &T) -> Result<Value>
  where
    T: Serialize + ?Sized,
  {
    let signed = self.signer.sign(key, body)?;
    let request = HttpRequest {
      method: HttpMethod::Post,
      url: self.url(path),
      headers: auth_headers(key, Some(&signed.signature)),
      body: Some(signed.payload),
    };
    self.dispatch(request).await
  }

  /// GET with bearer authorization only; read-only queries are unsigned.
  pub(crate) async fn get(&self, key: &str, path: &str) -> Result<Value> {
    let request = HttpRequest {
      method: HttpMethod::Get,
      url: self.url(path),
      headers: auth_headers(key, None),
      body: None,
    };
    self.dispatch(request).await
  }

  /// Send one request and decode its body as JSON.
  async fn dispatch(&self, request: HttpRequest) -> Result<Value> {
    let method = request.method;
    let url = request.url.clone();
    debug!(%method, %url, "Dispatching request");

    let response = self
      .transport
      .execute(request)
      .await
      .with_context(|| format!("{method} {url} failed"))?;

    if !response.is_success() {
      warn!(status = response.status, %url, "Non-success HTTP status, decoding body anyway");
    }

    serde_json::from_str(&response.body).with_context(|| {
      format!(
        "Failed to decode {method} {url} response as JSON (HTTP {})",
        response.status
      )
    })
  }
}

/// Header set for a request. The key doubles as the bearer token.
fn auth_headers(key: &str, signature: Option<&SignatureResult>) -> Vec<(String, String)> {
  let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
  if let Some(sig) = signature {
    headers.push((SIGN_HEADER.to_string(), sig.signature.clone()));
    headers.push((NONCE_HEADER.to_string(), sig.timestamp.clone()));
  }
  headers.push(("Authorization".to_string(), key.to_string()));
  headers
}

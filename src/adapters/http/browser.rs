//! Browser-profile Transport - reqwest adapter for `HttpTransport`
//!
//! The futures web API sits behind bot detection that rejects obvious
//! programmatic clients. This transport presents the request profile of
//! desktop Chrome on the futures web app (user agent, client hints, fetch
//! metadata, origin/referer) over rustls.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER};
use tracing::debug;

use crate::ports::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Desktop Chrome user agent.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
  (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const CHROME_CLIENT_HINTS: [(&str, &str); 6] = [
  (
    "sec-ch-ua",
    "\"Chromium\";v=\"124\", \"Google Chrome\";v=\"124\", \"Not-A.Brand\";v=\"99\"",
  ),
  ("sec-ch-ua-mobile", "?0"),
  ("sec-ch-ua-platform", "\"Windows\""),
  ("sec-fetch-dest", "empty"),
  ("sec-fetch-mode", "cors"),
  ("sec-fetch-site", "same-origin"),
];

/// Configuration for the browser-profile transport.
#[derive(Debug, Clone)]
pub struct BrowserTransportConfig {
  /// User-Agent header value.
  pub user_agent: String,
  /// Origin the requests claim to come from (also used as Referer).
  pub origin: String,
  /// Whole-request timeout. `None` keeps reqwest's default (no timeout).
  pub timeout: Option<Duration>,
}

impl Default for BrowserTransportConfig {
  fn default() -> Self {
    Self {
      user_agent: CHROME_USER_AGENT.to_string(),
      origin: crate::adapters::api::client::DEFAULT_BASE_URL.to_string(),
      timeout: None,
    }
  }
}

/// `HttpTransport` backed by a Chrome-profiled reqwest client.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
  /// Underlying HTTP client.
  http: Client,
}

impl BrowserTransport {
  /// Build the transport.
  ///
  /// # Errors
  /// Invalid header values in the config, or TLS backend init failure.
  pub fn new(config: &BrowserTransportConfig) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(
      ACCEPT,
      HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    for (name, value) in CHROME_CLIENT_HINTS {
      headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    let origin = config.origin.trim_end_matches('/');
    headers.insert(
      ORIGIN,
      HeaderValue::from_str(origin).context("Invalid origin header")?,
    );
    headers.insert(
      REFERER,
      HeaderValue::from_str(&format!("{origin}/")).context("Invalid referer header")?,
    );

    let mut builder = Client::builder()
      .user_agent(config.user_agent.as_str())
      .default_headers(headers)
      .gzip(true)
      .pool_max_idle_per_host(5);
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    let http = builder.build().context("Failed to build HTTP client")?;
    Ok(Self { http })
  }
}

#[async_trait]
impl HttpTransport for BrowserTransport {
  async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
    let method = match request.method {
      HttpMethod::Get => reqwest::Method::GET,
      HttpMethod::Post => reqwest::Method::POST,
    };

    let mut builder = self.http.request(method, &request.url);
    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response = builder.send().await.context("HTTP request failed")?;
    let status = response.status().as_u16();
    let body = response
      .text()
      .await
      .context("Failed to read response body")?;

    debug!(status, bytes = body.len(), "Response received");
    Ok(HttpResponse { status, body })
  }
}

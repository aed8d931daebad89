//! Configuration Module - TOML-based Client Configuration
//!
//! Loads optional settings from a TOML file, with `.env` / environment
//! variables supplying the credential. Every field has a default, so the
//! CLI runs without a config file.

pub mod loader;

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::api::client::DEFAULT_BASE_URL;
use crate::adapters::http::browser::{BrowserTransportConfig, CHROME_USER_AGENT};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Logging settings.
  #[serde(default)]
  pub client: ClientConfig,
  /// Exchange endpoint and transport settings.
  #[serde(default)]
  pub api: ApiConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Output format.
  #[serde(default)]
  pub log_format: LogFormat,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      log_format: LogFormat::default(),
    }
  }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable.
  #[default]
  Pretty,
  /// Structured JSON lines.
  Json,
}

/// Exchange API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Futures web host.
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Request timeout in milliseconds. Unset = transport default.
  #[serde(default)]
  pub timeout_ms: Option<u64>,
  /// User-Agent presented to the exchange.
  #[serde(default = "default_user_agent")]
  pub user_agent: String,
  /// Environment variable holding the web API key.
  #[serde(default = "default_key_env")]
  pub key_env: String,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      timeout_ms: None,
      user_agent: default_user_agent(),
      key_env: default_key_env(),
    }
  }
}

impl ApiConfig {
  /// Request timeout, if configured.
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_ms.map(Duration::from_millis)
  }

  /// Transport settings derived from this section.
  pub fn transport(&self) -> BrowserTransportConfig {
    BrowserTransportConfig {
      user_agent: self.user_agent.clone(),
      origin: self.base_url.clone(),
      timeout: self.timeout(),
    }
  }

  /// Read the web API key from the configured environment variable.
  ///
  /// # Errors
  /// Variable unset, not unicode, or empty.
  pub fn load_key(&self) -> Result<String> {
    let key = std::env::var(&self.key_env)
      .with_context(|| format!("{} not set", self.key_env))?;
    anyhow::ensure!(!key.trim().is_empty(), "{} is empty", self.key_env);
    Ok(key)
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_base_url() -> String {
  DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
  CHROME_USER_AGENT.to_string()
}

fn default_key_env() -> String {
  "MEXC_WEB_KEY".to_string()
}

//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the TOML config file, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    base_url = %config.api.base_url,
    timeout_ms = ?config.api.timeout_ms,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - An http(s) base URL
/// - A non-empty credential variable name
/// - A positive timeout when one is set
fn validate_config(config: &AppConfig) -> Result<()> {
  let base_url = &config.api.base_url;
  anyhow::ensure!(
    base_url.starts_with("https://") || base_url.starts_with("http://"),
    "api.base_url must be an http(s) URL, got {base_url:?}"
  );

  anyhow::ensure!(
    !config.api.key_env.trim().is_empty(),
    "api.key_env must not be empty"
  );

  if let Some(timeout_ms) = config.api.timeout_ms {
    anyhow::ensure!(timeout_ms > 0, "api.timeout_ms must be positive");
  }

  anyhow::ensure!(
    !config.api.user_agent.trim().is_empty(),
    "api.user_agent must not be empty"
  );

  Ok(())
}

//! Account & Contract Queries
//!
//! Read-only GET endpoints: the contract listing (for contract sizes) and
//! the account asset listing. Both return the raw listing to callers who
//! want it; the typed helpers here extract single values from them.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::MexcClient;
use super::types::{AccountAsset, ApiEnvelope, ContractDetail};
use crate::domain::contract::ContractSizeLookup;
use crate::domain::sizing::contracts_from_notional;

const CONTRACT_DETAIL: &str = "/api/v1/contract/detail";
const ACCOUNT_ASSETS: &str = "/api/v1/private/account/assets";

impl MexcClient {
  /// Look up the contract size of `symbol`.
  ///
  /// Fetches the full contract listing and scans it linearly.
  ///
  /// # Errors
  /// Transport/decode failures, or a listing without a `data` array.
  /// A missing symbol is `ContractSizeLookup::SymbolNotFound`, not an error.
  #[instrument(skip(self, key))]
  pub async fn get_contract_size(&self, key: &str, symbol: &str) -> Result<ContractSizeLookup> {
    let listing = self
      .get(key, CONTRACT_DETAIL)
      .await
      .context("Failed to fetch contract listing")?;

    let lookup = contract_size_in_listing(&listing, symbol)?;
    debug!(symbol, %lookup, "Contract size resolved");
    Ok(lookup)
  }

  /// Fetch and parse the full contract listing.
  pub async fn get_contract_details(&self, key: &str) -> Result<Vec<ContractDetail>> {
    let listing = self
      .get(key, CONTRACT_DETAIL)
      .await
      .context("Failed to fetch contract listing")?;
    let envelope: ApiEnvelope<Vec<ContractDetail>> =
      serde_json::from_value(listing).context("Failed to parse contract listing")?;
    into_data(envelope)
  }

  /// Fetch the account asset listing, verbatim.
  #[instrument(skip(self, key))]
  pub async fn get_balance(&self, key: &str) -> Result<Value> {
    self
      .get(key, ACCOUNT_ASSETS)
      .await
      .context("Failed to fetch account assets")
  }

  /// Available balance for one currency, `None` if the account holds none.
  ///
  /// # Errors
  /// Transport/decode failures, or an exchange-reported error.
  pub async fn available_balance(&self, key: &str, currency: &str) -> Result<Option<f64>> {
    let assets = self.get_balance(key).await?;
    let envelope: ApiEnvelope<Vec<AccountAsset>> =
      serde_json::from_value(assets).context("Failed to parse account assets")?;

    let balance = into_data(envelope)?
      .into_iter()
      .find(|asset| asset.currency.eq_ignore_ascii_case(currency))
      .and_then(|asset| asset.available_balance);
    Ok(balance)
  }

  /// Convert a notional amount into contracts for `symbol`.
  ///
  /// # Errors
  /// When the symbol is unlisted, has no contract size, or the sizing
  /// arithmetic is undefined.
  pub async fn contracts_for_notional(
    &self,
    key: &str,
    symbol: &str,
    notional_volume: f64,
    fair_price: f64,
  ) -> Result<f64> {
    let size = match self.get_contract_size(key, symbol).await? {
      ContractSizeLookup::Found(size) => size,
      other => bail!("Cannot size {symbol}: {other}"),
    };
    contracts_from_notional(notional_volume, fair_price, size)
      .with_context(|| format!("Failed to size {notional_volume} notional of {symbol}"))
  }
}

/// Scan `data[]` for `symbol` and read its `contractSize`.
fn contract_size_in_listing(listing: &Value, symbol: &str) -> Result<ContractSizeLookup> {
  let entries = listing
    .get("data")
    .and_then(Value::as_array)
    .context("Contract listing has no data array")?;

  let Some(entry) = entries
    .iter()
    .find(|entry| entry.get("symbol").and_then(Value::as_str) == Some(symbol))
  else {
    return Ok(ContractSizeLookup::SymbolNotFound);
  };

  let size = entry.get("contractSize").and_then(|v| {
    v.as_f64()
      .or_else(|| v.as_str().and_then(|s| s.parse::<f64>().ok()))
  });

  Ok(match size {
    Some(size) => ContractSizeLookup::Found(size),
    None => ContractSizeLookup::Unspecified,
  })
}

/// Unwrap the envelope payload, surfacing exchange-reported failures.
fn into_data<T>(envelope: ApiEnvelope<Vec<T>>) -> Result<Vec<T>> {
  if !envelope.success && envelope.code != 0 {
    bail!(
      "Exchange error {}: {}",
      envelope.code,
      envelope.message.unwrap_or_default()
    );
  }
  Ok(envelope.data.unwrap_or_default())
}

//! Futures API Response Types
//!
//! Typed views over the few response shapes the client inspects itself.
//! Every operation still hands the caller the raw `serde_json::Value`;
//! these types only back `get_contract_details` and `available_balance`.

use serde::Deserialize;

/// Standard envelope: `{"success":..,"code":..,"data":..}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
  /// Whether the exchange accepted the request.
  #[serde(default)]
  pub success: bool,
  /// Exchange status code (0 on success).
  #[serde(default)]
  pub code: i64,
  /// Error message when `success` is false.
  #[serde(default)]
  pub message: Option<String>,
  /// Payload.
  pub data: Option<T>,
}

/// One entry from `/api/v1/contract/detail`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetail {
  /// Contract symbol, e.g. `BTC_USDT`.
  pub symbol: String,
  /// Underlying quantity per contract.
  #[serde(default)]
  pub contract_size: Option<f64>,
  /// Base asset.
  #[serde(default)]
  pub base_coin: Option<String>,
  /// Quote asset.
  #[serde(default)]
  pub quote_coin: Option<String>,
  /// Minimum order volume in contracts.
  #[serde(default)]
  pub min_vol: Option<f64>,
  /// Maximum order volume in contracts.
  #[serde(default)]
  pub max_vol: Option<f64>,
  /// Price tick.
  #[serde(default)]
  pub price_unit: Option<f64>,
  /// Volume step.
  #[serde(default)]
  pub vol_unit: Option<f64>,
  /// Maximum leverage.
  #[serde(default)]
  pub max_leverage: Option<f64>,
}

/// One entry from `/api/v1/private/account/assets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
  /// Asset code, e.g. `USDT`.
  pub currency: String,
  /// Balance available for new orders.
  #[serde(default)]
  pub available_balance: Option<f64>,
  /// Total equity.
  #[serde(default)]
  pub equity: Option<f64>,
  /// Margin locked in open positions.
  #[serde(default)]
  pub position_margin: Option<f64>,
  /// Balance frozen by open orders.
  #[serde(default)]
  pub frozen_balance: Option<f64>,
  /// Unrealized PnL.
  #[serde(default)]
  pub unrealized: Option<f64>,
}

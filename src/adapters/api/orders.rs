//! Order Endpoints — Place, Cancel, Edit, Close
//!
//! Every mutating action is a signed POST whose body is exactly the
//! payload that was signed. Bodies are passed through unmodified: the
//! exchange validates them, this layer does not.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::client::MexcClient;

const ORDER_CREATE: &str = "/api/v1/private/order/create";
const ORDER_CANCEL: &str = "/api/v1/private/order/cancel";
const ORDER_CANCEL_ALL: &str = "/api/v1/private/order/cancel_all";
const POSITION_CLOSE_ALL: &str = "/api/v1/private/position/close_all";
const ORDER_CHANGE_PREFIX: &str = "/api/v1/private/order/change_";

/// Order-type selector used by [`MexcClient::edit_limit_order`].
pub const DEFAULT_EDIT_ORDER_TYPE: &str = "limit_order";

impl MexcClient {
  /// Place a new order.
  ///
  /// `order` is any serializable order body: a `serde_json::Value`
  /// mapping or a typed `FuturesOrder`. Placing the same body twice
  /// creates two orders.
  #[instrument(skip(self, key, order))]
  pub async fn place_order<T>(&self, key: &str, order: &T) -> Result<Value>
  where
    T: Serialize + ?Sized,
  {
    let response = self
      .signed_post(key, ORDER_CREATE, order)
      .await
      .context("Failed to place order")?;
    info!(success = ?response.get("success"), "Order create request sent");
    Ok(response)
  }

  /// Cancel orders by ID. The body is the JSON array of IDs.
  #[instrument(skip(self, key, order_ids), fields(count = order_ids.len()))]
  pub async fn cancel_order<I>(&self, key: &str, order_ids: &[I]) -> Result<Value>
  where
    I: Serialize,
  {
    self
      .signed_post(key, ORDER_CANCEL, order_ids)
      .await
      .context("Failed to cancel orders")
  }

  /// Cancel every open order on the account.
  #[instrument(skip(self, key))]
  pub async fn cancel_all(&self, key: &str) -> Result<Value> {
    let response = self
      .signed_post(key, ORDER_CANCEL_ALL, &json!({}))
      .await
      .context("Failed to cancel all orders")?;
    info!("Cancel-all request sent");
    Ok(response)
  }

  /// Force-close every open position at market.
  #[instrument(skip(self, key))]
  pub async fn close_all_positions(&self, key: &str) -> Result<Value> {
    let response = self
      .signed_post(key, POSITION_CLOSE_ALL, &json!({}))
      .await
      .context("Failed to close all positions")?;
    info!("Close-all-positions request sent");
    Ok(response)
  }

  /// Change an existing order.
  ///
  /// `order_type` selects the endpoint (`change_{order_type}`); it goes
  /// into the URL path, never into the body.
  #[instrument(skip(self, key, order))]
  pub async fn edit_order<T>(&self, key: &str, order: &T, order_type: &str) -> Result<Value>
  where
    T: Serialize + ?Sized,
  {
    let path = format!("{ORDER_CHANGE_PREFIX}{order_type}");
    self
      .signed_post(key, &path, order)
      .await
      .with_context(|| format!("Failed to edit {order_type}"))
  }

  /// Change an existing limit order.
  pub async fn edit_limit_order<T>(&self, key: &str, order: &T) -> Result<Value>
  where
    T: Serialize + ?Sized,
  {
    self.edit_order(key, order, DEFAULT_EDIT_ORDER_TYPE).await
  }
}

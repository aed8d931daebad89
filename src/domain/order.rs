//! Futures order specification.
//!
//! The client accepts any serializable order body. `FuturesOrder` is the
//! typed way to build one: it serializes with the exchange's camelCase field
//! names and integer enum codes, in the same field order the web front-end
//! sends (`symbol, side, openType, type, leverage, vol, price, ...`).

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Order side. Futures sides encode both direction and open/close intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OrderSide {
    /// Open a long position.
    OpenLong = 1,
    /// Close a short position.
    CloseShort = 2,
    /// Open a short position.
    OpenShort = 3,
    /// Close a long position.
    CloseLong = 4,
}

impl OrderSide {
    /// Whether this side reduces an existing position.
    pub fn is_close(&self) -> bool {
        matches!(self, OrderSide::CloseShort | OrderSide::CloseLong)
    }
}

/// Margin mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OpenType {
    /// Isolated margin.
    Isolated = 1,
    /// Cross margin.
    Cross = 2,
}

/// Execution type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OrderKind {
    /// Resting limit order.
    Limit = 1,
    /// Post-only maker order.
    PostOnly = 2,
    /// Immediate-or-cancel.
    ImmediateOrCancel = 3,
    /// Fill-or-kill.
    FillOrKill = 4,
    /// Market order.
    Market = 5,
    /// Market order converted to a limit at the current price.
    MarketToLimit = 6,
}

/// Typed order body for `/api/v1/private/order/create`.
///
/// Field declaration order is serialization order, which the signature
/// covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrder {
    /// Contract symbol, e.g. `BTC_USDT`.
    pub symbol: String,
    /// Direction and open/close intent.
    pub side: OrderSide,
    /// Margin mode.
    pub open_type: OpenType,
    /// Execution type.
    #[serde(rename = "type")]
    pub kind: OrderKind,
    /// Leverage; required when opening with isolated margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    /// Volume in contracts.
    pub vol: f64,
    /// Limit price. Omitted for pure market orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Stop-loss trigger price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_price: Option<f64>,
    /// Take-profit trigger price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_price: Option<f64>,
    /// Only reduce an existing position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    /// Caller-assigned order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_oid: Option<String>,
}

impl FuturesOrder {
    /// Isolated-margin limit order.
    pub fn limit(symbol: impl Into<String>, side: OrderSide, vol: f64, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            open_type: OpenType::Isolated,
            kind: OrderKind::Limit,
            leverage: None,
            vol,
            price: Some(price),
            stop_loss_price: None,
            take_profit_price: None,
            reduce_only: None,
            external_oid: None,
        }
    }

    /// Isolated-margin market order.
    pub fn market(symbol: impl Into<String>, side: OrderSide, vol: f64) -> Self {
        Self {
            kind: OrderKind::Market,
            price: None,
            ..Self::limit(symbol, side, vol, 0.0)
        }
    }

    /// Set leverage.
    pub fn with_leverage(mut self, leverage: u32) -> Self {
        self.leverage = Some(leverage);
        self
    }

    /// Set margin mode.
    pub fn with_open_type(mut self, open_type: OpenType) -> Self {
        self.open_type = open_type;
        self
    }

    /// Set execution type.
    pub fn with_kind(mut self, kind: OrderKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach stop-loss / take-profit triggers.
    pub fn with_brackets(mut self, stop_loss: Option<f64>, take_profit: Option<f64>) -> Self {
        self.stop_loss_price = stop_loss;
        self.take_profit_price = take_profit;
        self
    }

    /// Mark as reduce-only.
    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = Some(true);
        self
    }

    /// Set a caller-assigned order ID.
    pub fn with_external_oid(mut self, oid: impl Into<String>) -> Self {
        self.external_oid = Some(oid.into());
        self
    }
}

//! MEXC Futures Client — Library Root
//!
//! Signed client for the MEXC futures private web API: request signing,
//! order placement/amendment/cancellation, position close-out, balances
//! and contract metadata.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::api::{MexcClient, MexcClientConfig, MexcSigner, SignatureResult, sign, sign_at};
pub use adapters::http::{BrowserTransport, BrowserTransportConfig};
pub use domain::{ContractSizeLookup, FuturesOrder, contracts_from_notional};

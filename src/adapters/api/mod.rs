//! MEXC Futures Web API Adapter
//!
//! Implements the signed HTTP client for the MEXC futures private API.
//! Handles request signing, order placement/cancellation/amendment,
//! position close-out and account/contract queries.
//!
//! Sub-modules:
//! - `auth`: MD5 request signing (`x-mxc-sign` / `x-mxc-nonce`)
//! - `canonical`: byte-exact compact JSON for signed bodies
//! - `client`: request building and dispatch over `HttpTransport`
//! - `orders`: order and position endpoints
//! - `account`: contract listing and account asset queries
//! - `types`: API response type definitions

pub mod account;
pub mod auth;
pub mod canonical;
pub mod client;
pub mod orders;
pub mod types;

pub use auth::{MexcSigner, SignatureResult, SignedBody, sign, sign_at};
pub use client::{DEFAULT_BASE_URL, MexcClient, MexcClientConfig};
pub use orders::DEFAULT_EDIT_ORDER_TYPE;

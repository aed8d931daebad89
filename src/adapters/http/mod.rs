//! HTTP Transport Adapters
//!
//! Concrete implementations of `crate::ports::transport::HttpTransport`.
//!
//! Sub-modules:
//! - `browser`: reqwest client presenting a desktop Chrome request profile

pub mod browser;

pub use browser::{BrowserTransport, BrowserTransportConfig, CHROME_USER_AGENT};

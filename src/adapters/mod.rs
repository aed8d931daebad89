//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements and consumes the port traits defined in `crate::ports`
//! with concrete external dependencies.
//!
//! Adapter categories:
//! - `api`: MEXC futures REST client and request signing
//! - `http`: reqwest-based transport with a browser request profile

pub mod api;
pub mod http;

//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) the client requires from the outside
//! world. Adapters implement these traits; tests mock them.
//!
//! Port categories:
//! - `HttpTransport`: one-shot outbound HTTP requests
//! - `Clock`: wall-clock milliseconds for request nonces

pub mod clock;
pub mod transport;

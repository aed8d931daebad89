//! Domain layer - Pure trading types and arithmetic.
//!
//! No I/O here (hexagonal architecture inner ring).

pub mod contract;
pub mod order;
pub mod sizing;

// Re-export core types for convenience
pub use contract::ContractSizeLookup;
pub use order::{FuturesOrder, OpenType, OrderKind, OrderSide};
pub use sizing::{SizingError, contracts_from_notional, contracts_from_notional_decimal};

//! Contract size lookup outcome.
//!
//! The contract listing can fail to answer "what is the contract size of
//! X" in two distinct ways: the symbol is not listed at all, or it is
//! listed without a usable size. Both are ordinary outcomes, not errors.

use std::fmt;

/// Result of scanning the contract listing for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContractSizeLookup {
    /// Symbol listed with this contract size.
    Found(f64),
    /// Symbol listed, but its `contractSize` is missing or null.
    Unspecified,
    /// Symbol not present in the listing.
    SymbolNotFound,
}

impl ContractSizeLookup {
    /// The contract size, if one was found.
    pub fn size(&self) -> Option<f64> {
        match self {
            ContractSizeLookup::Found(size) => Some(*size),
            _ => None,
        }
    }

    /// Whether the symbol appeared in the listing.
    pub fn is_listed(&self) -> bool {
        !matches!(self, ContractSizeLookup::SymbolNotFound)
    }
}

impl fmt::Display for ContractSizeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractSizeLookup::Found(size) => write!(f, "{size}"),
            ContractSizeLookup::Unspecified => f.write_str("contract size unspecified"),
            ContractSizeLookup::SymbolNotFound => f.write_str("symbol not found"),
        }
    }
}

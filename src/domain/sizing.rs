//! Notional-to-contract sizing.
//!
//! Futures orders are sized in contracts, strategies usually think in quote
//! currency. `contracts = notional / (fair_price * contract_size)`.
//!
//! Exposes an f64 API for the adapters/CLI boundary and a `Decimal` API for
//! callers that need exact arithmetic.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from notional-to-contract conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// `fair_price * contract_size` is zero.
    #[error("fair price ({fair_price}) times contract size ({contract_size}) is zero")]
    ZeroDenominator {
        /// Price used.
        fair_price: String,
        /// Contract size used.
        contract_size: String,
    },
    /// An input or the result is NaN or infinite.
    #[error("non-finite sizing input or result")]
    NonFinite,
    /// Decimal arithmetic overflowed.
    #[error("decimal overflow while sizing")]
    Overflow,
}

/// Convert a notional volume to an exchange-native contract count.
///
/// # Errors
/// `ZeroDenominator` when `fair_price * contract_size == 0`,
/// `NonFinite` for NaN/infinite inputs or results.
pub fn contracts_from_notional(
    notional_volume: f64,
    fair_price: f64,
    contract_size: f64,
) -> Result<f64, SizingError> {
    if !notional_volume.is_finite() || !fair_price.is_finite() || !contract_size.is_finite() {
        return Err(SizingError::NonFinite);
    }

    let denominator = fair_price * contract_size;
    if denominator == 0.0 {
        return Err(SizingError::ZeroDenominator {
            fair_price: fair_price.to_string(),
            contract_size: contract_size.to_string(),
        });
    }

    let contracts = notional_volume / denominator;
    if !contracts.is_finite() {
        return Err(SizingError::NonFinite);
    }
    Ok(contracts)
}

/// Exact variant of [`contracts_from_notional`].
///
/// # Errors
/// `ZeroDenominator` when `fair_price * contract_size == 0`,
/// `Overflow` when the product or quotient does not fit a `Decimal`.
pub fn contracts_from_notional_decimal(
    notional_volume: Decimal,
    fair_price: Decimal,
    contract_size: Decimal,
) -> Result<Decimal, SizingError> {
    let denominator = fair_price
        .checked_mul(contract_size)
        .ok_or(SizingError::Overflow)?;
    if denominator.is_zero() {
        return Err(SizingError::ZeroDenominator {
            fair_price: fair_price.to_string(),
            contract_size: contract_size.to_string(),
        });
    }
    notional_volume
        .checked_div(denominator)
        .ok_or(SizingError::Overflow)
}

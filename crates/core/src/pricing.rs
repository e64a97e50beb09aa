//! Discount arithmetic for product prices.
//!
//! All monetary values are `rust_decimal::Decimal` and keep full precision.
//! Rounding to the currency's minor unit (2 decimal places for USD) happens
//! only at display time, never before a value is stored, so repeated reads
//! never compound rounding error.
//!
//! Out-of-range inputs are rejected rather than clamped. The catalog layer
//! validates upstream records once at conversion time, so stores and views
//! can hold prices that are already known to be consistent.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from price calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Base price was negative.
    #[error("base price must be non-negative, got {0}")]
    NegativeBasePrice(Decimal),

    /// Discount percentage was outside `0..=100`.
    #[error("discount percentage must be within 0..=100, got {0}")]
    DiscountOutOfRange(Decimal),

    /// A 100% discount has no recoverable original price.
    #[error("original price is undefined for a 100% discount")]
    FullDiscount,
}

/// Compute the price after a percentage discount is applied.
///
/// `effective = base * (1 - discount_percentage / 100)`, full precision.
///
/// # Errors
///
/// Returns `PricingError` if `base` is negative or `discount_percentage`
/// lies outside `0..=100`.
pub fn effective_price(base: Decimal, discount_percentage: Decimal) -> Result<Decimal, PricingError> {
    if base < Decimal::ZERO {
        return Err(PricingError::NegativeBasePrice(base));
    }
    validate_percentage(discount_percentage)?;
    Ok(base * (Decimal::ONE - discount_percentage / Decimal::ONE_HUNDRED))
}

/// Recover the original price from a discounted price.
///
/// Used to redisplay a struck-through original price next to a stored
/// discounted value.
///
/// # Errors
///
/// Returns `PricingError::FullDiscount` when `discount_percentage == 100`
/// (the original price is unrecoverable), or `DiscountOutOfRange` for a
/// percentage outside `0..=100`.
pub fn original_price(
    discounted: Decimal,
    discount_percentage: Decimal,
) -> Result<Decimal, PricingError> {
    validate_percentage(discount_percentage)?;
    if discount_percentage == Decimal::ONE_HUNDRED {
        return Err(PricingError::FullDiscount);
    }
    Ok(discounted / (Decimal::ONE - discount_percentage / Decimal::ONE_HUNDRED))
}

/// Round a monetary amount to the minor unit for display.
///
/// Storage keeps full precision; only rendered values pass through here.
#[must_use]
pub fn display(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Format a monetary amount as a USD display string, e.g. `$80.00`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", display(amount))
}

fn validate_percentage(discount_percentage: Decimal) -> Result<(), PricingError> {
    if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::ONE_HUNDRED {
        return Err(PricingError::DiscountOutOfRange(discount_percentage));
    }
    Ok(())
}

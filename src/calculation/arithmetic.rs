//! Checked decimal helpers shared by the calculation steps.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CalculatorError, CalculatorResult};

/// Divides `numerator` by `denominator`, reporting overflow or a zero divisor.
pub(crate) fn checked_div(
    numerator: Decimal,
    denominator: Decimal,
    context: &str,
) -> CalculatorResult<Decimal> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| CalculatorError::Calculation {
            message: format!("{context}: cannot divide {numerator} by {denominator}"),
        })
}

/// Multiplies two decimals, reporting overflow.
pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal, context: &str) -> CalculatorResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| CalculatorError::Calculation {
            message: format!("{context}: {lhs} * {rhs} overflows"),
        })
}

/// Rounds half away from zero to `places` and pads the scale so the value
/// always displays with exactly `places` decimals ("4" becomes "4.0").
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

//! Input validation for the time cost form.
//!
//! Checks run in a fixed order and stop at the first failure: presence of
//! each field first, then the numeric range of each field.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{RawInputs, ValidatedInputs};

/// Upper bound for daily working hours, inclusive.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Validates raw form inputs and parses them into numbers.
///
/// # Precedence
///
/// 1. Empty income
/// 2. Empty daily hours
/// 3. Empty price
/// 4. Income not a number or not positive
/// 5. Daily hours not a number, not positive, or above 24
/// 6. Price not a number or not positive
///
/// Only the first failing check is reported.
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::validate_inputs;
/// use time_cost_engine::error::ValidationError;
/// use time_cost_engine::models::RawInputs;
///
/// let valid = validate_inputs(&RawInputs::new("52000", "8", "100")).unwrap();
/// assert_eq!(valid.daily_hours().to_string(), "8");
///
/// let error = validate_inputs(&RawInputs::new("", "8", "")).unwrap_err();
/// assert_eq!(error, ValidationError::MissingIncome);
/// ```
pub fn validate_inputs(inputs: &RawInputs) -> Result<ValidatedInputs, ValidationError> {
    if inputs.yearly_income.is_empty() {
        return Err(ValidationError::MissingIncome);
    }
    if inputs.daily_hours.is_empty() {
        return Err(ValidationError::MissingDailyHours);
    }
    if inputs.item_price.is_empty() {
        return Err(ValidationError::MissingPrice);
    }

    let yearly_income = parse_number(&inputs.yearly_income)
        .filter(|income| *income > Decimal::ZERO)
        .ok_or(ValidationError::InvalidIncome)?;

    let daily_hours = parse_number(&inputs.daily_hours)
        .filter(|hours| *hours > Decimal::ZERO && *hours <= MAX_DAILY_HOURS)
        .ok_or(ValidationError::InvalidDailyHours)?;

    let item_price = parse_number(&inputs.item_price)
        .filter(|price| *price > Decimal::ZERO)
        .ok_or(ValidationError::InvalidPrice)?;

    Ok(ValidatedInputs::new(
        yearly_income,
        daily_hours,
        item_price,
        inputs.is_recurring,
        inputs.precision,
    ))
}

/// Parses a plain decimal number, ignoring surrounding whitespace.
fn parse_number(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

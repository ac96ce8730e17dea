//! Human-readable rendering of working time.
//!
//! Turns a fractional number of hours into text such as "2 hours and 30
//! minutes" and a shift count such as "0.5 shifts of 8 hours".

use rust_decimal::Decimal;

use crate::models::{DurationPrecision, LESS_THAN_ONE_SHIFT};

use super::arithmetic::round_to;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Formats `count` followed by `unit`, plural unless the count is exactly one.
///
/// ```
/// use time_cost_engine::calculation::pluralize;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pluralize(Decimal::ONE, "hour"), "1 hour");
/// assert_eq!(pluralize(Decimal::ZERO, "minute"), "0 minutes");
/// ```
pub fn pluralize(count: Decimal, unit: &str) -> String {
    if count == Decimal::ONE {
        format!("{} {}", count.normalize(), unit)
    } else {
        format!("{} {}s", count.normalize(), unit)
    }
}

/// Splits fractional hours into whole hours and rounded minutes.
///
/// A remainder that rounds up to 60 minutes carries into the next hour.
pub fn split_hours_minutes(working_hours: Decimal) -> (Decimal, Decimal) {
    let hours = working_hours.floor();
    let minutes = round_to((working_hours - hours) * MINUTES_PER_HOUR, 0);

    if minutes == MINUTES_PER_HOUR {
        (hours + Decimal::ONE, Decimal::ZERO)
    } else {
        (hours, minutes)
    }
}

/// Renders a duration in the requested precision.
///
/// Under one hour, minute precision always reads as whole minutes, up to
/// "60 minutes".
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::format_duration;
/// use time_cost_engine::models::DurationPrecision;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("2.5").unwrap();
/// assert_eq!(format_duration(hours, DurationPrecision::Minutes), "2 hours and 30 minutes");
/// assert_eq!(format_duration(hours, DurationPrecision::DecimalHours), "2.5 hours");
/// ```
pub fn format_duration(working_hours: Decimal, precision: DurationPrecision) -> String {
    match precision {
        DurationPrecision::DecimalHours => format!("{} hours", round_to(working_hours, 1)),
        DurationPrecision::Minutes => {
            if working_hours < Decimal::ONE {
                return pluralize(round_to(working_hours * MINUTES_PER_HOUR, 0), "minute");
            }

            let (hours, minutes) = split_hours_minutes(working_hours);

            if minutes.is_zero() {
                pluralize(hours, "hour")
            } else {
                format!(
                    "{} and {}",
                    pluralize(hours, "hour"),
                    pluralize(minutes, "minute")
                )
            }
        }
    }
}

/// Renders `shifts` as "`<N>` shifts of `<daily_hours>` hours".
fn shifts_of(shifts: Decimal, daily_hours: Decimal) -> String {
    format!("{} shifts of {} hours", shifts, daily_hours.normalize())
}

/// Renders how many shifts of `daily_hours` the working time represents.
///
/// In minute precision, anything under one hour or rounding to zero shifts
/// is reported as [`LESS_THAN_ONE_SHIFT`].
pub fn format_shifts(
    working_hours: Decimal,
    shifts: Decimal,
    daily_hours: Decimal,
    precision: DurationPrecision,
) -> String {
    let rounded = round_to(shifts, 1);

    match precision {
        DurationPrecision::DecimalHours => shifts_of(rounded, daily_hours),
        DurationPrecision::Minutes => {
            if working_hours < Decimal::ONE || rounded.is_zero() {
                LESS_THAN_ONE_SHIFT.to_string()
            } else {
                shifts_of(rounded, daily_hours)
            }
        }
    }
}

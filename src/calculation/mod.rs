//! Calculation logic for the Time Cost Engine.
//!
//! This module contains input validation, hourly rate derivation, the
//! one-time and recurring cost conversions, and the text rendering of
//! durations and shift counts.

mod arithmetic;
mod duration_text;
mod hourly_rate;
mod one_time;
mod recurring;
mod time_cost;
mod validation;

pub use arithmetic::round_to;
pub use duration_text::{format_duration, format_shifts, pluralize, split_hours_minutes};
pub use hourly_rate::{
    HourlyRateResult, WORKING_DAYS_PER_WEEK, WORKING_DAYS_PER_YEAR, WORKING_WEEKS_PER_YEAR,
    annual_working_hours, calculate_hourly_rate,
};
pub use one_time::{OneTimeCostResult, calculate_one_time_cost};
pub use recurring::{MONTHS_PER_YEAR, RecurringCostResult, calculate_recurring_cost};
pub use time_cost::{TimeCostCalculation, calculate_time_cost};
pub use validation::{MAX_DAILY_HOURS, validate_inputs};

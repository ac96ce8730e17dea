//! Result models describing what a purchase costs in working time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text used when a cost amounts to less than a single shift.
pub const LESS_THAN_ONE_SHIFT: &str = "less than one shift";

/// Working time needed to pay for a one-time purchase.
///
/// # Example
///
/// ```
/// use time_cost_engine::models::OneTimeCost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = OneTimeCost {
///     hourly_rate: Decimal::from_str("25.00").unwrap(),
///     working_hours: Decimal::from_str("4").unwrap(),
///     duration_text: "4 hours".to_string(),
///     shifts_text: "0.5 shifts of 8 hours".to_string(),
/// };
/// assert_eq!(cost.duration_text, "4 hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCost {
    /// Net hourly earnings, rounded to 2 decimal places.
    pub hourly_rate: Decimal,
    /// Unrounded hours of work the price represents.
    pub working_hours: Decimal,
    /// Human-readable duration, e.g. "2 hours and 30 minutes".
    pub duration_text: String,
    /// Shift count text, e.g. "0.5 shifts of 8 hours".
    pub shifts_text: String,
}

/// Working time needed to pay for a monthly recurring cost.
///
/// All hour and shift values are rounded to 1 decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringCost {
    /// Net hourly earnings, rounded to 2 decimal places.
    pub hourly_rate: Decimal,
    /// Hours of work per month.
    pub monthly_hours: Decimal,
    /// Shifts of work per month.
    pub monthly_shifts: Decimal,
    /// Hours of work per year.
    pub yearly_hours: Decimal,
    /// Shifts of work per year.
    pub yearly_shifts: Decimal,
}

/// The outcome of a time cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeCost {
    /// A single purchase.
    OneTime(OneTimeCost),
    /// A monthly subscription or bill.
    Recurring(RecurringCost),
}

impl TimeCost {
    /// Returns the rounded hourly rate regardless of the cost kind.
    pub fn hourly_rate(&self) -> Decimal {
        match self {
            TimeCost::OneTime(cost) => cost.hourly_rate,
            TimeCost::Recurring(cost) => cost.hourly_rate,
        }
    }

    /// Returns true for monthly recurring costs.
    pub fn is_recurring(&self) -> bool {
        matches!(self, TimeCost::Recurring(_))
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TimeCost::OneTime(_) => "one_time",
            TimeCost::Recurring(_) => "recurring",
        }
    }
}

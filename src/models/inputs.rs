//! Input models for a time cost calculation.
//!
//! [`RawInputs`] mirrors the form exactly as the user typed it. Only the
//! validator turns it into [`ValidatedInputs`], whose numbers are known to
//! be in range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a one-time duration is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPrecision {
    /// Whole hours plus remaining minutes, e.g. "2 hours and 30 minutes".
    #[default]
    Minutes,
    /// Decimal hours rounded to one place, e.g. "2.5 hours".
    DecimalHours,
}

/// The raw, unvalidated form inputs.
///
/// # Example
///
/// ```
/// use time_cost_engine::models::RawInputs;
///
/// let inputs = RawInputs::new("52000", "8", "100");
/// assert!(!inputs.is_recurring);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Net annual income as typed.
    pub yearly_income: String,
    /// Daily working hours as typed.
    pub daily_hours: String,
    /// Item or service price as typed.
    pub item_price: String,
    /// Whether the price is a monthly recurring cost.
    #[serde(default)]
    pub is_recurring: bool,
    /// How one-time durations are expressed.
    #[serde(default)]
    pub precision: DurationPrecision,
}

impl RawInputs {
    /// Creates one-time inputs with the default precision.
    pub fn new(
        yearly_income: impl Into<String>,
        daily_hours: impl Into<String>,
        item_price: impl Into<String>,
    ) -> Self {
        Self {
            yearly_income: yearly_income.into(),
            daily_hours: daily_hours.into(),
            item_price: item_price.into(),
            is_recurring: false,
            precision: DurationPrecision::default(),
        }
    }

    /// Marks the price as a monthly recurring cost.
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Sets the duration precision.
    pub fn with_precision(mut self, precision: DurationPrecision) -> Self {
        self.precision = precision;
        self
    }
}

/// Inputs that passed validation.
///
/// Fields are private so that every instance is guaranteed to hold a
/// positive income, daily hours in (0, 24] and a positive price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInputs {
    yearly_income: Decimal,
    daily_hours: Decimal,
    item_price: Decimal,
    is_recurring: bool,
    precision: DurationPrecision,
}

impl ValidatedInputs {
    pub(crate) fn new(
        yearly_income: Decimal,
        daily_hours: Decimal,
        item_price: Decimal,
        is_recurring: bool,
        precision: DurationPrecision,
    ) -> Self {
        Self {
            yearly_income,
            daily_hours,
            item_price,
            is_recurring,
            precision,
        }
    }

    /// Net annual income.
    pub fn yearly_income(&self) -> Decimal {
        self.yearly_income
    }

    /// Daily working hours.
    pub fn daily_hours(&self) -> Decimal {
        self.daily_hours
    }

    /// Item price, monthly when recurring.
    pub fn item_price(&self) -> Decimal {
        self.item_price
    }

    /// Whether the price is a monthly recurring cost.
    pub fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    /// How one-time durations are expressed.
    pub fn precision(&self) -> DurationPrecision {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_inputs_deserialize_with_defaults() {
        let json = r#"{
            "yearly_income": "52000",
            "daily_hours": "8",
            "item_price": "100"
        }"#;

        let inputs: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.yearly_income, "52000");
        assert!(!inputs.is_recurring);
        assert_eq!(inputs.precision, DurationPrecision::Minutes);
    }

    #[test]
    fn test_precision_serialization() {
        let json = serde_json::to_string(&DurationPrecision::DecimalHours).unwrap();
        assert_eq!(json, "\"decimal_hours\"");
    }

    #[test]
    fn test_builder_helpers() {
        let inputs = RawInputs::new("1", "2", "3")
            .recurring()
            .with_precision(DurationPrecision::DecimalHours);

        assert!(inputs.is_recurring);
        assert_eq!(inputs.precision, DurationPrecision::DecimalHours);
        assert_eq!(inputs.item_price, "3");
    }
}

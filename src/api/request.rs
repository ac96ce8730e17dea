//! Request types for the Time Cost Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{DurationPrecision, RawInputs};

/// A form field value as sent by a client.
///
/// Browsers submit form values as text, but API clients commonly send bare
/// numbers; both are accepted and handed to the validator as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A textual value, passed through untouched.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => text,
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Omitted input fields are treated as empty, so the validator reports them
/// as missing rather than the request being rejected as malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Net annual income.
    #[serde(default)]
    pub yearly_income: FieldValue,
    /// Daily working hours.
    #[serde(default)]
    pub daily_hours: FieldValue,
    /// Item or service price.
    #[serde(default)]
    pub item_price: FieldValue,
    /// Whether the price is a monthly recurring cost.
    #[serde(default)]
    pub is_recurring: bool,
    /// How one-time durations are expressed.
    #[serde(default)]
    pub precision: DurationPrecision,
}

impl From<CalculationRequest> for RawInputs {
    fn from(req: CalculationRequest) -> Self {
        RawInputs {
            yearly_income: req.yearly_income.into(),
            daily_hours: req.daily_hours.into(),
            item_price: req.item_price.into(),
            is_recurring: req.is_recurring,
            precision: req.precision,
        }
    }
}

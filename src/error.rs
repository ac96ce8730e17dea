//! Error types for the Time Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`ValidationError`] covers every problem with user-supplied form input,
//! while [`CalculatorError`] is the umbrella type returned by fallible
//! operations such as configuration loading and arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// The yearly net income field.
    YearlyIncome,
    /// The daily working hours field.
    DailyHours,
    /// The item or service price field.
    ItemPrice,
}

impl InputField {
    /// Returns the field name as used in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::YearlyIncome => "yearly_income",
            InputField::DailyHours => "daily_hours",
            InputField::ItemPrice => "item_price",
        }
    }
}

/// A single violated input precondition.
///
/// The validator reports only the first failing check, so a form never
/// carries more than one of these at a time.
///
/// # Example
///
/// ```
/// use time_cost_engine::error::ValidationError;
///
/// let error = ValidationError::MissingIncome;
/// assert_eq!(error.to_string(), "Please enter your yearly income");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The income field is empty.
    #[error("Please enter your yearly income")]
    MissingIncome,

    /// The daily hours field is empty.
    #[error("Please enter your daily working hours")]
    MissingDailyHours,

    /// The price field is empty.
    #[error("Please enter the item price")]
    MissingPrice,

    /// The income is not a number or is not positive.
    #[error("Please enter a valid yearly income")]
    InvalidIncome,

    /// The daily hours are not a number or fall outside (0, 24].
    #[error("Please enter valid daily hours (between 0 and 24)")]
    InvalidDailyHours,

    /// The price is not a number or is not positive.
    #[error("Please enter a valid price")]
    InvalidPrice,
}

impl ValidationError {
    /// Returns the field this error concerns.
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::MissingIncome | ValidationError::InvalidIncome => {
                InputField::YearlyIncome
            }
            ValidationError::MissingDailyHours | ValidationError::InvalidDailyHours => {
                InputField::DailyHours
            }
            ValidationError::MissingPrice | ValidationError::InvalidPrice => InputField::ItemPrice,
        }
    }

    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingIncome => "income_required",
            ValidationError::MissingDailyHours => "daily_hours_required",
            ValidationError::MissingPrice => "price_required",
            ValidationError::InvalidIncome => "invalid_income",
            ValidationError::InvalidDailyHours => "invalid_daily_hours",
            ValidationError::InvalidPrice => "invalid_price",
        }
    }
}

/// The main error type for the Time Cost Engine.
///
/// # Example
///
/// ```
/// use time_cost_engine::error::CalculatorError;
///
/// let error = CalculatorError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// User input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

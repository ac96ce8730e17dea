//! Form state container.
//!
//! [`CalculatorForm`] holds what the user typed plus the outcome of the last
//! explicit calculation. Every calculation starts from scratch; nothing is
//! memoized between runs.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{calculate_time_cost, validate_inputs};
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AuditTrace, CalculationResult, DurationPrecision, RawInputs};

/// The outcome of the most recent calculation.
#[derive(Debug)]
pub enum FormOutcome<'a> {
    /// Nothing has been calculated yet.
    Pending,
    /// The last calculation failed.
    Error(&'a CalculatorError),
    /// The last calculation succeeded.
    Result(&'a CalculationResult),
}

/// Mutable form state bound to the calculator inputs.
///
/// # Example
///
/// ```
/// use time_cost_engine::form::CalculatorForm;
///
/// let mut form = CalculatorForm::new();
/// form.set_yearly_income("$52,000");
/// form.set_daily_hours("8");
/// form.set_item_price("100");
/// form.calculate();
///
/// assert_eq!(form.inputs().yearly_income, "52000");
/// assert!(form.result().is_some());
/// assert!(form.error().is_none());
/// ```
#[derive(Debug, Default)]
pub struct CalculatorForm {
    inputs: RawInputs,
    result: Option<CalculationResult>,
    error: Option<CalculatorError>,
}

impl CalculatorForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with `inputs`, taken verbatim.
    ///
    /// Unlike [`set_yearly_income`](Self::set_yearly_income), income is not
    /// filtered to digits, so values such as `"52000.0"` or `"-52000"` reach
    /// the validator unchanged.
    pub fn with_inputs(inputs: RawInputs) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Sets the yearly income, keeping only ASCII digits.
    pub fn set_yearly_income(&mut self, value: &str) {
        self.inputs.yearly_income = value.chars().filter(|c| c.is_ascii_digit()).collect();
    }

    /// Sets the daily working hours text.
    pub fn set_daily_hours(&mut self, value: impl Into<String>) {
        self.inputs.daily_hours = value.into();
    }

    /// Sets the item price text.
    pub fn set_item_price(&mut self, value: impl Into<String>) {
        self.inputs.item_price = value.into();
    }

    /// Marks the price as monthly recurring or one-time.
    pub fn set_recurring(&mut self, recurring: bool) {
        self.inputs.is_recurring = recurring;
    }

    /// Sets how one-time durations are expressed.
    pub fn set_precision(&mut self, precision: DurationPrecision) {
        self.inputs.precision = precision;
    }

    /// Returns the current raw inputs.
    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Validates the inputs and recomputes the result.
    ///
    /// Clears the previous error first. On failure the error is stored and
    /// any earlier result is dropped.
    pub fn calculate(&mut self) {
        self.error = None;

        match self.run() {
            Ok(result) => {
                self.result = Some(result);
            }
            Err(err) => {
                debug!(error = %err, "Form calculation rejected");
                self.result = None;
                self.error = Some(err);
            }
        }
    }

    /// Validates and calculates without touching the stored outcome.
    pub fn run(&self) -> CalculatorResult<CalculationResult> {
        let start = Instant::now();
        let validated = validate_inputs(&self.inputs)?;
        let calculation = calculate_time_cost(&validated)?;

        Ok(CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs: self.inputs.clone(),
            time_cost: calculation.time_cost,
            audit_trace: AuditTrace {
                steps: calculation.audit_steps,
                duration_us: start.elapsed().as_micros() as u64,
            },
        })
    }

    /// Returns the last successful result, if the last calculation succeeded.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Returns the last error, if the last calculation failed.
    pub fn error(&self) -> Option<&CalculatorError> {
        self.error.as_ref()
    }

    /// Returns the outcome of the last calculation.
    pub fn outcome(&self) -> FormOutcome<'_> {
        match (&self.error, &self.result) {
            (Some(err), _) => FormOutcome::Error(err),
            (None, Some(result)) => FormOutcome::Result(result),
            (None, None) => FormOutcome::Pending,
        }
    }
}

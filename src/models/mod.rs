//! Core data models for the Time Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod inputs;
mod time_cost;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use inputs::{DurationPrecision, RawInputs, ValidatedInputs};
pub use time_cost::{LESS_THAN_ONE_SHIFT, OneTimeCost, RecurringCost, TimeCost};

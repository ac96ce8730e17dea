//! One-time purchase calculation.

use rust_decimal::Decimal;

use crate::error::CalculatorResult;
use crate::models::{AuditStep, DurationPrecision, OneTimeCost};

use super::arithmetic::{checked_div, round_to};
use super::duration_text::{format_duration, format_shifts};

/// The one-time cost and the audit steps documenting it.
#[derive(Debug, Clone)]
pub struct OneTimeCostResult {
    /// The calculated cost.
    pub cost: OneTimeCost,
    /// Audit steps for the working hours and duration formatting.
    pub audit_steps: Vec<AuditStep>,
}

/// Converts a one-time price into working time.
///
/// `hourly_rate` must be the unrounded rate; the cost carries it rounded to
/// cents for display.
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::calculate_one_time_cost;
/// use time_cost_engine::models::DurationPrecision;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_one_time_cost(
///     dec("100"),
///     dec("25"),
///     dec("8"),
///     DurationPrecision::Minutes,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(result.cost.duration_text, "4 hours");
/// assert_eq!(result.cost.shifts_text, "0.5 shifts of 8 hours");
/// ```
pub fn calculate_one_time_cost(
    item_price: Decimal,
    hourly_rate: Decimal,
    daily_hours: Decimal,
    precision: DurationPrecision,
    step_number: u32,
) -> CalculatorResult<OneTimeCostResult> {
    let working_hours = checked_div(item_price, hourly_rate, "working hours")?;
    let shifts = checked_div(working_hours, daily_hours, "shift count")?;

    let duration_text = format_duration(working_hours, precision);
    let shifts_text = format_shifts(working_hours, shifts, daily_hours, precision);

    let hours_step = AuditStep {
        step_number,
        rule_id: "working_hours".to_string(),
        rule_name: "Working Hours".to_string(),
        input: serde_json::json!({
            "item_price": item_price.normalize().to_string(),
            "hourly_rate": round_to(hourly_rate, 2).to_string()
        }),
        output: serde_json::json!({
            "working_hours": round_to(working_hours, 4).normalize().to_string(),
            "shifts": round_to(shifts, 1).to_string()
        }),
        reasoning: format!(
            "A price of {} at {} per hour takes {} hours of work",
            item_price.normalize(),
            round_to(hourly_rate, 2),
            round_to(working_hours, 2).normalize()
        ),
    };

    let format_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "duration_format".to_string(),
        rule_name: "Duration Format".to_string(),
        input: serde_json::json!({
            "working_hours": round_to(working_hours, 4).normalize().to_string(),
            "precision": precision,
        }),
        output: serde_json::json!({
            "duration_text": duration_text,
            "shifts_text": shifts_text
        }),
        reasoning: match precision {
            DurationPrecision::Minutes if working_hours < Decimal::ONE => {
                "Under one hour: reported in whole minutes, less than one shift".to_string()
            }
            DurationPrecision::Minutes => {
                "Split into whole hours and rounded remaining minutes".to_string()
            }
            DurationPrecision::DecimalHours => {
                "Reported as decimal hours rounded to one place".to_string()
            }
        },
    };

    Ok(OneTimeCostResult {
        cost: OneTimeCost {
            hourly_rate: round_to(hourly_rate, 2),
            working_hours,
            duration_text,
            shifts_text,
        },
        audit_steps: vec![hours_step, format_step],
    })
}

//! Monthly recurring cost calculation.
//!
//! A recurring price is treated as a monthly amount and annualized by
//! multiplying the unrounded monthly hours by 12. Unlike one-time costs,
//! shift counts are always numeric, however small.

use rust_decimal::Decimal;

use crate::error::CalculatorResult;
use crate::models::{AuditStep, RecurringCost};

use super::arithmetic::{checked_div, checked_mul, round_to};

/// Months in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The recurring cost and the audit steps documenting it.
#[derive(Debug, Clone)]
pub struct RecurringCostResult {
    /// The calculated cost, rounded for display.
    pub cost: RecurringCost,
    /// Unrounded hours of work per month.
    pub monthly_working_hours: Decimal,
    /// Unrounded hours of work per year.
    pub yearly_working_hours: Decimal,
    /// Audit steps for the monthly hours and the annualization.
    pub audit_steps: Vec<AuditStep>,
}

/// Converts a monthly price into monthly and yearly working time.
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::calculate_recurring_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_recurring_cost(dec("50"), dec("25"), dec("8"), 2).unwrap();
///
/// assert_eq!(result.cost.monthly_hours.to_string(), "2.0");
/// assert_eq!(result.cost.yearly_hours.to_string(), "24.0");
/// ```
pub fn calculate_recurring_cost(
    monthly_price: Decimal,
    hourly_rate: Decimal,
    daily_hours: Decimal,
    step_number: u32,
) -> CalculatorResult<RecurringCostResult> {
    let monthly_hours = checked_div(monthly_price, hourly_rate, "monthly working hours")?;
    let yearly_hours = checked_mul(monthly_hours, MONTHS_PER_YEAR, "yearly working hours")?;
    let monthly_shifts = checked_div(monthly_hours, daily_hours, "monthly shifts")?;
    let yearly_shifts = checked_div(yearly_hours, daily_hours, "yearly shifts")?;

    let cost = RecurringCost {
        hourly_rate: round_to(hourly_rate, 2),
        monthly_hours: round_to(monthly_hours, 1),
        monthly_shifts: round_to(monthly_shifts, 1),
        yearly_hours: round_to(yearly_hours, 1),
        yearly_shifts: round_to(yearly_shifts, 1),
    };

    let monthly_step = AuditStep {
        step_number,
        rule_id: "monthly_working_hours".to_string(),
        rule_name: "Monthly Working Hours".to_string(),
        input: serde_json::json!({
            "monthly_price": monthly_price.normalize().to_string(),
            "hourly_rate": cost.hourly_rate.to_string()
        }),
        output: serde_json::json!({
            "monthly_hours": cost.monthly_hours.to_string(),
            "monthly_shifts": cost.monthly_shifts.to_string()
        }),
        reasoning: format!(
            "A monthly price of {} at {} per hour takes {} hours of work each month",
            monthly_price.normalize(),
            cost.hourly_rate,
            cost.monthly_hours
        ),
    };

    let yearly_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "recurring_annualization".to_string(),
        rule_name: "Recurring Annualization".to_string(),
        input: serde_json::json!({
            "monthly_hours": cost.monthly_hours.to_string(),
            "months": MONTHS_PER_YEAR.to_string()
        }),
        output: serde_json::json!({
            "yearly_hours": cost.yearly_hours.to_string(),
            "yearly_shifts": cost.yearly_shifts.to_string()
        }),
        reasoning: format!(
            "Monthly hours × {} = {} hours of work per year",
            MONTHS_PER_YEAR, cost.yearly_hours
        ),
    };

    Ok(RecurringCostResult {
        cost,
        monthly_working_hours: monthly_hours,
        yearly_working_hours: yearly_hours,
        audit_steps: vec![monthly_step, yearly_step],
    })
}

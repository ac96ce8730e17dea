//! Entry point tying the calculation steps together.

use tracing::debug;

use crate::error::CalculatorResult;
use crate::models::{AuditStep, TimeCost, ValidatedInputs};

use super::hourly_rate::calculate_hourly_rate;
use super::one_time::calculate_one_time_cost;
use super::recurring::calculate_recurring_cost;

/// A calculated time cost and the steps that produced it.
#[derive(Debug, Clone)]
pub struct TimeCostCalculation {
    /// The working time the price represents.
    pub time_cost: TimeCost,
    /// Every audit step, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Converts validated inputs into working time.
///
/// Derives the hourly rate, then branches on the recurring flag. The result
/// carries the hourly rate rounded to cents, but every further value is
/// derived from the unrounded rate.
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::{calculate_time_cost, validate_inputs};
/// use time_cost_engine::models::{RawInputs, TimeCost};
///
/// let inputs = validate_inputs(&RawInputs::new("52000", "8", "100")).unwrap();
/// let calculation = calculate_time_cost(&inputs).unwrap();
///
/// match calculation.time_cost {
///     TimeCost::OneTime(cost) => assert_eq!(cost.duration_text, "4 hours"),
///     TimeCost::Recurring(_) => unreachable!(),
/// }
/// ```
pub fn calculate_time_cost(inputs: &ValidatedInputs) -> CalculatorResult<TimeCostCalculation> {
    let rate = calculate_hourly_rate(inputs.yearly_income(), inputs.daily_hours(), 1)?;
    let mut audit_steps = vec![rate.audit_step.clone()];

    let time_cost = if inputs.is_recurring() {
        let recurring = calculate_recurring_cost(
            inputs.item_price(),
            rate.hourly_rate,
            inputs.daily_hours(),
            2,
        )?;
        audit_steps.extend(recurring.audit_steps);
        TimeCost::Recurring(recurring.cost)
    } else {
        let one_time = calculate_one_time_cost(
            inputs.item_price(),
            rate.hourly_rate,
            inputs.daily_hours(),
            inputs.precision(),
            2,
        )?;
        audit_steps.extend(one_time.audit_steps);
        TimeCost::OneTime(one_time.cost)
    };

    debug!(
        kind = time_cost.kind(),
        hourly_rate = %time_cost.hourly_rate(),
        steps = audit_steps.len(),
        "Time cost calculated"
    );

    Ok(TimeCostCalculation {
        time_cost,
        audit_steps,
    })
}

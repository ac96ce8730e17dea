//! Hourly rate derivation.
//!
//! The rate assumes a five-day working week for 52 weeks a year, so the
//! annual working hours are always `daily_hours × 260`.

use rust_decimal::Decimal;

use crate::error::CalculatorResult;
use crate::models::AuditStep;

use super::arithmetic::{checked_div, checked_mul, round_to};

/// Working days in a week.
pub const WORKING_DAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Weeks in a working year.
pub const WORKING_WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Working days in a year (5 × 52).
pub const WORKING_DAYS_PER_YEAR: Decimal = Decimal::from_parts(260, 0, 0, false, 0);

/// The derived hourly rate and the audit step documenting it.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// `daily_hours × 260`.
    pub annual_working_hours: Decimal,
    /// Unrounded net income per working hour.
    pub hourly_rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

impl HourlyRateResult {
    /// The rate rounded to cents, as displayed.
    pub fn display_rate(&self) -> Decimal {
        round_to(self.hourly_rate, 2)
    }
}

/// Returns the number of hours worked in a year at `daily_hours` per day.
pub fn annual_working_hours(daily_hours: Decimal) -> CalculatorResult<Decimal> {
    checked_mul(daily_hours, WORKING_DAYS_PER_YEAR, "annual working hours")
}

/// Derives net hourly earnings from annual income and daily hours.
///
/// # Examples
///
/// ```
/// use time_cost_engine::calculation::calculate_hourly_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let income = Decimal::from_str("52000").unwrap();
/// let hours = Decimal::from_str("8").unwrap();
/// let result = calculate_hourly_rate(income, hours, 1).unwrap();
///
/// assert_eq!(result.annual_working_hours, Decimal::from_str("2080").unwrap());
/// assert_eq!(result.display_rate().to_string(), "25.00");
/// ```
pub fn calculate_hourly_rate(
    yearly_income: Decimal,
    daily_hours: Decimal,
    step_number: u32,
) -> CalculatorResult<HourlyRateResult> {
    let annual_hours = annual_working_hours(daily_hours)?;
    let hourly_rate = checked_div(yearly_income, annual_hours, "hourly rate")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        input: serde_json::json!({
            "yearly_income": yearly_income.normalize().to_string(),
            "daily_hours": daily_hours.normalize().to_string(),
            "days_per_week": WORKING_DAYS_PER_WEEK.to_string(),
            "weeks_per_year": WORKING_WEEKS_PER_YEAR.to_string()
        }),
        output: serde_json::json!({
            "annual_working_hours": annual_hours.normalize().to_string(),
            "hourly_rate": round_to(hourly_rate, 2).to_string()
        }),
        reasoning: format!(
            "{} / ({} hours × {} days × {} weeks = {} hours) = {} per hour",
            yearly_income.normalize(),
            daily_hours.normalize(),
            WORKING_DAYS_PER_WEEK,
            WORKING_WEEKS_PER_YEAR,
            annual_hours.normalize(),
            round_to(hourly_rate, 2)
        ),
    };

    Ok(HourlyRateResult {
        annual_working_hours: annual_hours,
        hourly_rate,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_days_per_year_is_five_by_fifty_two() {
        assert_eq!(WORKING_DAYS_PER_WEEK * WORKING_WEEKS_PER_YEAR, WORKING_DAYS_PER_YEAR);
    }

    #[test]
    fn test_standard_full_time_rate() {
        let result = calculate_hourly_rate(dec("52000"), dec("8"), 1).unwrap();
        assert_eq!(result.annual_working_hours, dec("2080"));
        assert_eq!(result.hourly_rate, dec("25"));
        assert_eq!(result.display_rate().to_string(), "25.00");
    }

    #[test]
    fn test_display_rate_rounds_to_cents() {
        // 50000 / 1950 = 25.641...
        let result = calculate_hourly_rate(dec("50000"), dec("7.5"), 1).unwrap();
        assert_eq!(result.display_rate().to_string(), "25.64");
        assert!(result.hourly_rate > dec("25.64"));
    }

    #[test]
    fn test_audit_step_records_derivation() {
        let result = calculate_hourly_rate(dec("52000"), dec("8"), 3).unwrap();
        let step = &result.audit_step;
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "hourly_rate");
        assert_eq!(step.output["annual_working_hours"], "2080");
        assert_eq!(step.output["hourly_rate"], "25.00");
        assert!(step.reasoning.contains("2080 hours"));
    }

    proptest! {
        #[test]
        fn prop_rate_is_income_over_hours_times_260(
            income_cents in 1u64..=100_000_000_000u64,
            hours_tenths in 1u32..=240u32,
        ) {
            let income = Decimal::new(income_cents as i64, 2);
            let hours = Decimal::new(hours_tenths as i64, 1);

            let result = calculate_hourly_rate(income, hours, 1).unwrap();
            prop_assert_eq!(result.hourly_rate, income / (hours * dec("260")));
            prop_assert!(result.hourly_rate > Decimal::ZERO);
        }
    }
}

//! Currency display formatting.
//!
//! The calculation never formats money itself; the presentation layer passes
//! the rounded hourly rate through a [`CurrencyFormatter`].

use rust_decimal::Decimal;

use crate::calculation::round_to;
use crate::config::CurrencyConfig;

/// Turns an amount into a display string.
pub trait CurrencyFormatter: Send + Sync {
    /// Formats `amount` for display.
    fn format(&self, amount: Decimal) -> String;
}

/// Symbol-prefixed formatter with thousands grouping and two decimals.
///
/// # Examples
///
/// ```
/// use time_cost_engine::currency::{CurrencyFormatter, StandardCurrencyFormatter};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let formatter = StandardCurrencyFormatter::default();
/// let amount = Decimal::from_str("1234567.5").unwrap();
/// assert_eq!(formatter.format(amount), "$1,234,567.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardCurrencyFormatter {
    symbol: String,
    thousands_separator: String,
    decimal_separator: String,
}

impl StandardCurrencyFormatter {
    /// Creates a formatter with explicit symbol and separators.
    pub fn new(
        symbol: impl Into<String>,
        thousands_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator: thousands_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    fn group_thousands(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Default for StandardCurrencyFormatter {
    fn default() -> Self {
        Self::new("$", ",", ".")
    }
}

impl From<&CurrencyConfig> for StandardCurrencyFormatter {
    fn from(config: &CurrencyConfig) -> Self {
        Self::new(
            config.symbol.clone(),
            config.thousands_separator.clone(),
            config.decimal_separator.clone(),
        )
    }
}

impl CurrencyFormatter for StandardCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let rounded = round_to(amount, 2);
        let text = rounded.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{}{}{}{}{}",
            sign,
            self.symbol,
            self.group_thousands(whole),
            self.decimal_separator,
            fraction
        )
    }
}

//! Application state for the Time Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::currency::{CurrencyFormatter, StandardCurrencyFormatter};

/// Shared application state.
///
/// Holds the loaded configuration and the currency formatter. Both are
/// read-only; per-request form state is never shared.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl AppState {
    /// Creates application state using the configured currency settings.
    pub fn new(config: ConfigLoader) -> Self {
        let formatter = StandardCurrencyFormatter::from(config.currency());
        Self::with_formatter(config, formatter)
    }

    /// Creates application state with a custom currency formatter.
    pub fn with_formatter(config: ConfigLoader, formatter: impl CurrencyFormatter + 'static) -> Self {
        Self {
            config: Arc::new(config),
            formatter: Arc::new(formatter),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the currency formatter.
    pub fn formatter(&self) -> &dyn CurrencyFormatter {
        self.formatter.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_formatter_follows_config() {
        let config =
            ConfigLoader::from_yaml_str("currency:\n  symbol: \"€\"\n").unwrap();
        let state = AppState::new(config);
        assert_eq!(state.formatter().format(Decimal::new(2500, 2)), "€25.00");
    }
}

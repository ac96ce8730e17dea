//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;

use tracing::info;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::{CalculatorConfig, CurrencyConfig};

/// Loads and provides access to the calculator configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind_address: "127.0.0.1:3000"
/// currency:
///   symbol: "$"
///   thousands_separator: ","
///   decimal_separator: "."
/// ```
///
/// # Example
///
/// ```no_run
/// use time_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculator.yaml")?;
/// println!("Listening on {}", loader.bind_address());
/// # Ok::<(), time_cost_engine::error::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
    bind_address: SocketAddr,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file cannot be read, or is not valid YAML for this schema (`ConfigParseError`)
    /// - A value is unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CalculatorError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => CalculatorError::ConfigParseError {
                path: path_str.clone(),
                message: err.to_string(),
            },
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            CalculatorError::ConfigParseError { message, .. } => CalculatorError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, bind_address = %loader.bind_address, "Configuration loaded");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> CalculatorResult<Self> {
        let config: CalculatorConfig = if content.trim().is_empty() {
            CalculatorConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::from_config(config)
    }

    /// Validates an already-built configuration.
    pub fn from_config(config: CalculatorConfig) -> CalculatorResult<Self> {
        let bind_address = config.server.bind_address.parse::<SocketAddr>().map_err(|e| {
            CalculatorError::InvalidConfig {
                field: "server.bind_address".to_string(),
                message: format!("'{}' is not a socket address: {}", config.server.bind_address, e),
            }
        })?;

        Self::validate_currency(&config.currency)?;

        Ok(Self {
            config,
            bind_address,
        })
    }

    fn validate_currency(currency: &CurrencyConfig) -> CalculatorResult<()> {
        if currency.decimal_separator.is_empty() {
            return Err(CalculatorError::InvalidConfig {
                field: "currency.decimal_separator".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if currency.thousands_separator == currency.decimal_separator {
            return Err(CalculatorError::InvalidConfig {
                field: "currency.thousands_separator".to_string(),
                message: format!(
                    "must differ from the decimal separator '{}'",
                    currency.decimal_separator
                ),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the parsed server bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Returns the currency display settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.config.currency
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        let bind_address = SocketAddr::from(([127, 0, 0, 1], 3000));
        Self {
            config,
            bind_address,
        }
    }
}

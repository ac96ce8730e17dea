//! Configuration loading and management for the Time Cost Engine.
//!
//! This module loads the server and currency display settings from a YAML
//! file.
//!
//! # Example
//!
//! ```no_run
//! use time_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/calculator.yaml").unwrap();
//! println!("Currency symbol: {}", config.currency().symbol);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CurrencyConfig, DEFAULT_BIND_ADDRESS, ServerConfig};

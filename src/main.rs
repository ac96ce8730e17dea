//! HTTP server for the Time Cost Engine.
//!
//! Reads the configuration path from `TIME_COST_CONFIG`, falling back to
//! `./config/calculator.yaml`, then built-in defaults if that file is absent.

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info, warn};

use time_cost_engine::api::{AppState, create_router};
use time_cost_engine::config::ConfigLoader;
use time_cost_engine::error::CalculatorError;
use time_cost_engine::logging::init_logging;

const CONFIG_ENV_VAR: &str = "TIME_COST_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/calculator.yaml";

fn load_config() -> Result<ConfigLoader, CalculatorError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => ConfigLoader::load(path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => ConfigLoader::load(DEFAULT_CONFIG_PATH),
        Err(_) => {
            warn!(path = DEFAULT_CONFIG_PATH, "No configuration file, using defaults");
            Ok(ConfigLoader::default())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let bind_address = config.bind_address();
    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %bind_address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(address = %bind_address, version = env!("CARGO_PKG_VERSION"), "Time cost server listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

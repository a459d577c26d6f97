//! Sentiboard CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use sentiboard::{DashboardError, OperationMode, SentiboardConfig, dashboard, load_dataset, summary};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Dashboard => dashboard::run(&config).await,
        OperationMode::Summary => run_summary(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<SentiboardConfig, DashboardError> {
    SentiboardConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}

fn run_summary(config: &SentiboardConfig) -> Result<(), DashboardError> {
    let path = config.require_data_path()?;
    let dataset = load_dataset(path)?;
    let filter = config.initial_filter()?;

    let mut stdout = io::stdout().lock();
    summary::write_summary(&mut stdout, &dataset, &filter, config.top_word_limit())
}

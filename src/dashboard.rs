//! Interactive dashboard mode.
//!
//! This module loads the review dataset, optionally records a telemetry
//! event describing its shape, and hands control to the bubbletea-rs
//! program running the dashboard model.

use std::io::{self, Write};

use bubbletea_rs::Program;

use crate::config::SentiboardConfig;
use crate::data::load_dataset;
use crate::error::DashboardError;
use crate::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use crate::tui::{DashboardApp, set_initial_dataset};

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if:
/// - No data path is configured
/// - The CSV cannot be opened or parsed
/// - The TUI fails to initialise or run
pub async fn run(config: &SentiboardConfig) -> Result<(), DashboardError> {
    let path = config.require_data_path()?;
    let dataset = load_dataset(path)?;

    if config.telemetry {
        let sink = StderrJsonlTelemetrySink;
        sink.record(TelemetryEvent::DatasetLoaded {
            rows: dataset.len(),
            brands: dataset.brands().to_vec(),
            has_true_labels: dataset.has_true_labels(),
        });
    }

    // Store the dataset in module-level storage for Model::init() to
    // retrieve. If already set (e.g. re-running in the same process), the
    // existing data remains.
    let _ = set_initial_dataset(dataset);

    run_tui()
        .await
        .map_err(|error| DashboardError::Tui {
            message: error.to_string(),
        })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DashboardApp::init() retrieves the dataset from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed on exit.
    io::stdout().flush().ok();

    Ok(())
}

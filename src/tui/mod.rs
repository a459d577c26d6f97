//! Terminal User Interface for the sentiment dashboard.
//!
//! This module provides an interactive TUI for filtering and visualising
//! the review dataset using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic producing terminal text per tab
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Per-tab filter and cursor state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for the dataset. Call
//! [`set_initial_dataset`] before starting the program, and
//! `DashboardApp::init()` will automatically retrieve the data. The dataset
//! is read once per process; interactions never re-read the backing file.

use std::sync::OnceLock;

use crate::data::Dataset;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the loaded dataset.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static INITIAL_DATASET: OnceLock<Dataset> = OnceLock::new();

/// Sets the dataset for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// dataset will be read by `DashboardApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the dataset was set, `false` if one was already set.
pub fn set_initial_dataset(dataset: Dataset) -> bool {
    INITIAL_DATASET.set(dataset).is_ok()
}

/// Gets a clone of the stored dataset.
///
/// Called internally by `DashboardApp::init()`. Returns an empty dataset
/// if none was set.
///
/// Note: This function clones the data because `OnceLock` does not support
/// consuming (taking) the value.
pub(crate) fn get_initial_dataset() -> Dataset {
    INITIAL_DATASET.get().cloned().unwrap_or_default()
}

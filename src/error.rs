//! Error types surfaced by the dashboard.

use thiserror::Error;

/// Errors raised while loading configuration or review data, or while
/// running the terminal UI.
///
/// Variants carry pre-rendered message strings so the type stays `Clone`
/// and `PartialEq` for use in tests and UI state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// No review data path was configured.
    #[error("review data path is required (use --data-path or -d)")]
    MissingDataPath,

    /// The review data file could not be opened.
    #[error("failed to open review data at {path}: {message}")]
    Open {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// A row in the review data file could not be parsed.
    ///
    /// `row` is 1-based and counts data rows; 0 denotes the header.
    #[error("failed to parse review data row {row}: {message}")]
    Parse {
        /// 1-based data row number.
        row: usize,
        /// Underlying CSV error message.
        message: String,
    },

    /// Configuration was invalid or could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Underlying I/O error message.
        message: String,
    },

    /// The terminal UI failed to initialise or run.
    #[error("terminal UI error: {message}")]
    Tui {
        /// Underlying TUI runtime error message.
        message: String,
    },
}

impl DashboardError {
    /// Wraps an I/O error into the [`DashboardError::Io`] variant.
    #[must_use]
    pub fn from_io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.sentiboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SENTIBOARD_DATA_PATH` and friends
//! 4. **Command-line arguments** – `--data-path`/`-d` and friends
//!
//! # Configuration File
//!
//! Place `.sentiboard.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! data_path = "sentiment_analysis_data.csv"
//! brand = "BYD"
//! top_words = 15
//! telemetry = true
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::analysis::{BrandFilter, ReviewFilter, SentimentFilter};
use crate::data::Sentiment;
use crate::error::DashboardError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive dashboard TUI (the default).
    Dashboard,
    /// Non-interactive aggregate summary printed to stdout.
    Summary,
}

/// Default number of top words in summary mode.
const DEFAULT_TOP_WORDS: usize = 10;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SENTIBOARD_DATA_PATH` or `--data-path`: Review data CSV path
/// - `SENTIBOARD_BRAND` or `--brand`: Initial brand filter (summary mode)
/// - `SENTIBOARD_SENTIMENT` or `--sentiment`: Initial sentiment filter
///   (summary mode)
/// - `SENTIBOARD_TOP_WORDS` or `--top-words`: Top-word limit (summary mode)
///
/// # Example
///
/// ```no_run
/// use sentiboard::SentiboardConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = SentiboardConfig::load().expect("failed to load configuration");
/// let data_path = config.require_data_path().expect("data path required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SENTIBOARD",
    discovery(
        dotfile_name = ".sentiboard.toml",
        config_file_name = "sentiboard.toml",
        app_name = "sentiboard"
    )
)]
pub struct SentiboardConfig {
    /// Path to the review data CSV.
    ///
    /// Can be provided via:
    /// - CLI: `--data-path <PATH>` or `-d <PATH>`
    /// - Environment: `SENTIBOARD_DATA_PATH`
    /// - Config file: `data_path = "..."`
    #[ortho_config(cli_short = 'd')]
    pub data_path: Option<Utf8PathBuf>,

    /// Prints a non-interactive aggregate summary and exits.
    ///
    /// When unset, Sentiboard launches the interactive dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// Brand filter applied in summary mode.
    ///
    /// Can be provided via:
    /// - CLI: `--brand <BRAND>` or `-b <BRAND>`
    /// - Environment: `SENTIBOARD_BRAND`
    /// - Config file: `brand = "..."`
    #[ortho_config(cli_short = 'b')]
    pub brand: Option<String>,

    /// Predicted-sentiment filter applied in summary mode.
    ///
    /// Must be one of `positive`, `negative`, or `neutral`.
    ///
    /// Can be provided via:
    /// - CLI: `--sentiment <CLASS>`
    /// - Environment: `SENTIBOARD_SENTIMENT`
    /// - Config file: `sentiment = "..."`
    #[ortho_config()]
    pub sentiment: Option<String>,

    /// Number of top words reported in summary mode.
    ///
    /// Defaults to 10 when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--top-words <N>`
    /// - Config file: `top_words = 15`
    #[ortho_config()]
    pub top_words: Option<usize>,

    /// Emits JSONL telemetry events to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl SentiboardConfig {
    /// Returns the review data path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingDataPath`] when no path is configured.
    pub fn require_data_path(&self) -> Result<&Utf8Path, DashboardError> {
        self.data_path
            .as_deref()
            .ok_or(DashboardError::MissingDataPath)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Dashboard
        }
    }

    /// Builds the initial review filter from the configured brand and
    /// sentiment values.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the sentiment value is
    /// outside the positive/negative/neutral domain.
    pub fn initial_filter(&self) -> Result<ReviewFilter, DashboardError> {
        let brand = self
            .brand
            .clone()
            .map_or(BrandFilter::All, BrandFilter::Brand);
        let sentiment = match self.sentiment.as_deref() {
            None => SentimentFilter::All,
            Some(value) => {
                let parsed =
                    Sentiment::parse(value).ok_or_else(|| DashboardError::Configuration {
                        message: format!(
                            "unknown sentiment {value:?}; expected positive, negative, or neutral"
                        ),
                    })?;
                SentimentFilter::Only(parsed)
            }
        };
        Ok(ReviewFilter { brand, sentiment })
    }

    /// Returns the top-word limit for summary mode.
    #[must_use]
    pub fn top_word_limit(&self) -> usize {
        self.top_words.unwrap_or(DEFAULT_TOP_WORDS)
    }
}

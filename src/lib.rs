//! Sentiboard library crate providing electric-vehicle review sentiment
//! analytics.
//!
//! The library loads labelled review data from CSV, computes sentiment
//! aggregates (counts, percentages, dominant classes, prediction accuracy,
//! cross-tabulations, and word frequencies), and renders them in an
//! interactive terminal dashboard or as a one-shot text summary.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod summary;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, SentiboardConfig};
pub use data::{Dataset, Review, Sentiment, load_dataset};
pub use error::DashboardError;

//! UI components for the dashboard TUI.
//!
//! This module provides reusable rendering components. Each component is a
//! pure view over borrowed data; none of them hold mutable state beyond
//! layout dimensions.

mod bar_chart;
mod review_table;
mod text_truncate;

pub use bar_chart::{BarChartRow, render_bar_chart, render_stacked_bar};
pub use review_table::{ReviewTableComponent, ReviewTableViewContext};

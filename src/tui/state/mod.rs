//! State management for the dashboard TUI.
//!
//! This module provides the per-tab filter state and the cursor state for
//! the review listing.

mod filter_state;

pub use filter_state::{LimitState, ReviewListState, TabFilters, WORD_LIMIT, REVIEW_LIMIT};

//! Per-tab filter selections, item limits, and review-list cursor state.
//!
//! Every tab holds its own independent [`ReviewFilter`], mirroring the
//! original dashboard where each view had its own controls. Cursor position
//! is retained when filters change (clamped to the new valid range).

use crate::analysis::ReviewFilter;

use super::super::app::DashboardTab;

/// Bounds and step for a keyboard-driven item-limit selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitState {
    /// Current limit value.
    pub value: usize,
    /// Smallest allowed value.
    pub min: usize,
    /// Largest allowed value.
    pub max: usize,
    /// Amount added or removed per key press.
    pub step: usize,
}

/// Review-listing limit selector: 5 to 50 in steps of 5, default 10.
pub const REVIEW_LIMIT: LimitState = LimitState {
    value: 10,
    min: 5,
    max: 50,
    step: 5,
};

/// Top-word limit selector: 5 to 20 in steps of 1, default 10.
pub const WORD_LIMIT: LimitState = LimitState {
    value: 10,
    min: 5,
    max: 20,
    step: 1,
};

impl LimitState {
    /// Raises the limit by one step, saturating at the upper bound.
    pub const fn increase(&mut self) {
        let raised = self.value.saturating_add(self.step);
        self.value = if raised > self.max { self.max } else { raised };
    }

    /// Lowers the limit by one step, saturating at the lower bound.
    pub const fn decrease(&mut self) {
        let lowered = self.value.saturating_sub(self.step);
        self.value = if lowered < self.min { self.min } else { lowered };
    }
}

/// Cursor and scroll state for the review listing tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewListState {
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (lines scrolled from top).
    pub scroll_offset: usize,
}

impl ReviewListState {
    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor to the first item and resets scrolling.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }
}

/// Independent filter selections for every dashboard tab.
///
/// The Accuracy tab deliberately has no sentiment selection; its view
/// compares predicted against true labels across all classes, so only the
/// brand half of its filter is ever cycled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabFilters {
    /// Filter for the Counts tab.
    pub counts: ReviewFilter,
    /// Filter for the Distribution tab.
    pub distribution: ReviewFilter,
    /// Filter for the Reviews tab.
    pub reviews: ReviewFilter,
    /// Filter for the Accuracy tab (brand selection only is exposed).
    pub accuracy: ReviewFilter,
    /// Filter for the Top Words tab.
    pub top_words: ReviewFilter,
}

impl TabFilters {
    /// Returns the filter for the given tab.
    #[must_use]
    pub const fn for_tab(&self, tab: DashboardTab) -> &ReviewFilter {
        match tab {
            DashboardTab::Counts => &self.counts,
            DashboardTab::Distribution => &self.distribution,
            DashboardTab::Reviews => &self.reviews,
            DashboardTab::Accuracy => &self.accuracy,
            DashboardTab::TopWords => &self.top_words,
        }
    }

    /// Returns a mutable reference to the filter for the given tab.
    pub const fn for_tab_mut(&mut self, tab: DashboardTab) -> &mut ReviewFilter {
        match tab {
            DashboardTab::Counts => &mut self.counts,
            DashboardTab::Distribution => &mut self.distribution,
            DashboardTab::Reviews => &mut self.reviews,
            DashboardTab::Accuracy => &mut self.accuracy,
            DashboardTab::TopWords => &mut self.top_words,
        }
    }
}

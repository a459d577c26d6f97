//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! dashboard. It coordinates per-tab filter state and dispatches messages to
//! specialised handlers; rendering lives in the `rendering` submodule.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::analysis::ReviewFilter;
use crate::data::{Dataset, Review};

use super::components::ReviewTableComponent;
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::{LimitState, REVIEW_LIMIT, ReviewListState, TabFilters, WORD_LIMIT};

mod navigation;
mod rendering;
mod view_mode;

pub use view_mode::DashboardTab;

/// Terminal rows consumed by header, tab bar, filter bar, and status bar.
const CHROME_HEIGHT: usize = 8;

/// Main application model for the dashboard TUI.
#[derive(Debug)]
pub struct DashboardApp {
    /// The immutable review dataset.
    dataset: Dataset,
    /// Currently visible tab.
    pub(crate) tab: DashboardTab,
    /// Independent filter selections per tab.
    pub(crate) filters: TabFilters,
    /// Cursor and scroll state for the review listing tab.
    pub(crate) review_list: ReviewListState,
    /// "Number of reviews to show" selector.
    pub(crate) review_limit: LimitState,
    /// "Top N words" selector.
    pub(crate) word_limit: LimitState,
    /// Review table component.
    review_table: ReviewTableComponent,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
}

impl DashboardApp {
    /// Creates a new application over the given dataset.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            tab: DashboardTab::default(),
            filters: TabFilters::default(),
            review_list: ReviewListState::default(),
            review_limit: REVIEW_LIMIT,
            word_limit: WORD_LIMIT,
            review_table: ReviewTableComponent::new(),
            width: 80,
            height: 24,
            show_help: false,
        }
    }

    /// Creates an application over an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    /// Returns the loaded dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the filter for the active tab.
    #[must_use]
    pub const fn active_filter(&self) -> &ReviewFilter {
        self.filters.for_tab(self.tab)
    }

    /// Returns the reviews passing the active tab's filter, in file order.
    #[must_use]
    pub fn filtered_reviews(&self) -> Vec<&Review> {
        self.active_filter().apply(self.dataset.reviews())
    }

    /// Returns the count of reviews passing the active tab's filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered_reviews().len()
    }

    /// Returns the current cursor position in the review listing.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.review_list.cursor_position
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function. It delegates to specialised
    /// handlers per message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_tab() {
            return self.handle_tab_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches tab-selection messages.
    fn handle_tab_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::NextTab => self.set_tab(self.tab.next()),
            AppMsg::PrevTab => self.set_tab(self.tab.prev()),
            AppMsg::SelectTab(tab) => self.set_tab(*tab),
            _ => {
                debug_assert!(false, "non-tab message routed to handle_tab_msg");
            }
        }
        None
    }

    /// Dispatches filter and limit messages to their handlers.
    fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CycleBrand => self.handle_cycle_brand(),
            AppMsg::CycleSentiment => self.handle_cycle_sentiment(),
            AppMsg::ResetFilters => self.handle_reset_filters(),
            AppMsg::IncreaseLimit => self.handle_adjust_limit(true),
            AppMsg::DecreaseLimit => self.handle_adjust_limit(false),
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(false, "non-lifecycle message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    // Tab handlers

    fn set_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
        if tab == DashboardTab::Reviews {
            self.clamp_review_cursor();
        }
    }

    // Filter handlers

    fn handle_cycle_brand(&mut self) -> Option<Cmd> {
        let brands = self.dataset.brands().to_vec();
        let filter = self.filters.for_tab_mut(self.tab);
        filter.brand = filter.brand.cycled(&brands);
        self.after_filter_change();
        None
    }

    /// Cycles the predicted-sentiment selection on the active tab.
    ///
    /// The Accuracy tab exposes no sentiment control (its view compares
    /// labels across all classes), so the message is ignored there.
    fn handle_cycle_sentiment(&mut self) -> Option<Cmd> {
        if self.tab == DashboardTab::Accuracy {
            return None;
        }
        let filter = self.filters.for_tab_mut(self.tab);
        filter.sentiment = filter.sentiment.cycled();
        self.after_filter_change();
        None
    }

    fn handle_reset_filters(&mut self) -> Option<Cmd> {
        *self.filters.for_tab_mut(self.tab) = ReviewFilter::default();
        self.after_filter_change();
        None
    }

    /// Adjusts the active tab's item limit, if it has one.
    fn handle_adjust_limit(&mut self, increase: bool) -> Option<Cmd> {
        match self.tab {
            DashboardTab::Reviews => {
                if increase {
                    self.review_limit.increase();
                } else {
                    self.review_limit.decrease();
                }
                self.clamp_review_cursor();
            }
            DashboardTab::TopWords => {
                if increase {
                    self.word_limit.increase();
                } else {
                    self.word_limit.decrease();
                }
            }
            _ => {}
        }
        None
    }

    fn after_filter_change(&mut self) {
        tracing::debug!(tab = self.tab.title(), "filter changed; view recomputes");
        if self.tab == DashboardTab::Reviews {
            self.clamp_review_cursor();
        }
    }

    fn clamp_review_cursor(&mut self) {
        let count = self
            .filters
            .reviews
            .apply(self.dataset.reviews())
            .len()
            .min(self.review_limit.value);
        self.review_list.clamp_cursor(count);
        self.ensure_cursor_visible();
    }

    // Window event handlers

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let body_height = (height as usize).saturating_sub(CHROME_HEIGHT).max(1);
        self.review_table.set_visible_height(body_height);
        self.ensure_cursor_visible();
        None
    }
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the dataset from module-level storage.
        let dataset = super::get_initial_dataset();
        (Self::new(dataset), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay without further effect.
            if self.show_help {
                self.show_help = false;
                return None;
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_tab_bar());
        output.push_str(&self.render_filter_bar());
        output.push('\n');
        output.push_str(&self.render_active_tab());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

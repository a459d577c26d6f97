//! Navigation handlers and cursor management for the review listing.
//!
//! Cursor movement only applies on the Reviews tab; other tabs have no
//! cursor and silently ignore navigation messages. Scrolling is adjusted
//! after each movement so the cursor stays in the visible window.

use bubbletea_rs::Cmd;

use super::{DashboardApp, DashboardTab};
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches cursor-navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.tab != DashboardTab::Reviews {
            return None;
        }
        match msg {
            AppMsg::CursorUp => self.move_cursor_up(1),
            AppMsg::CursorDown => self.move_cursor_down(1),
            AppMsg::PageUp => self.move_cursor_up(self.page_size()),
            AppMsg::PageDown => self.move_cursor_down(self.page_size()),
            AppMsg::Home => self.review_list.home(),
            AppMsg::End => self.move_cursor_down(usize::MAX),
            _ => {
                debug_assert!(false, "non-navigation message routed to handle_navigation_msg");
            }
        }
        self.ensure_cursor_visible();
        None
    }

    /// Rows the cursor jumps on page navigation.
    fn page_size(&self) -> usize {
        self.visible_review_rows().max(1)
    }

    /// Rows of the review listing currently on screen.
    pub(super) fn visible_review_rows(&self) -> usize {
        self.review_table.window_rows(self.review_limit.value)
    }

    fn move_cursor_up(&mut self, step: usize) {
        self.review_list.cursor_position = self.review_list.cursor_position.saturating_sub(step);
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.listed_review_count().saturating_sub(1);
        self.review_list.cursor_position = self
            .review_list
            .cursor_position
            .saturating_add(step)
            .min(max_index);
    }

    /// Number of reviews addressable by the cursor: the filtered count
    /// capped at the tab's limit selector.
    pub(super) fn listed_review_count(&self) -> usize {
        self.filters
            .reviews
            .apply(self.dataset().reviews())
            .len()
            .min(self.review_limit.value)
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_position = self.review_list.cursor_position;
        let scroll_offset = self.review_list.scroll_offset;
        let visible_rows = self.visible_review_rows().max(1);

        if cursor_position < scroll_offset {
            self.review_list.scroll_offset = cursor_position;
            return;
        }

        let viewport_end = scroll_offset.saturating_add(visible_rows);
        if cursor_position >= viewport_end {
            self.review_list.scroll_offset =
                cursor_position.saturating_sub(visible_rows.saturating_sub(1));
        }
    }
}

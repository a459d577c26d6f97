//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events; there is no async data loading because the dataset is
//! immutable for the session.

use super::app::DashboardTab;

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Tab selection
    /// Switch to the next tab.
    NextTab,
    /// Switch to the previous tab.
    PrevTab,
    /// Jump directly to a tab.
    SelectTab(DashboardTab),

    // Filter changes (always applied to the active tab's own state)
    /// Cycle the brand selection (All, then each brand, then All).
    CycleBrand,
    /// Cycle the predicted-sentiment selection.
    CycleSentiment,
    /// Reset the active tab's filters to All/All.
    ResetFilters,
    /// Increase the active tab's item limit.
    IncreaseLimit,
    /// Decrease the active tab's item limit.
    DecreaseLimit,

    // Navigation within the review listing
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for tab-selection messages.
    #[must_use]
    pub const fn is_tab(&self) -> bool {
        matches!(self, Self::NextTab | Self::PrevTab | Self::SelectTab(_))
    }

    /// Returns true for filter and limit messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::CycleBrand
                | Self::CycleSentiment
                | Self::ResetFilters
                | Self::IncreaseLimit
                | Self::DecreaseLimit
        )
    }

    /// Returns true for cursor-navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }
}

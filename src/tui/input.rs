//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::app::DashboardTab;
use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextTab),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PrevTab),
        KeyCode::Char('1') => Some(AppMsg::SelectTab(DashboardTab::Counts)),
        KeyCode::Char('2') => Some(AppMsg::SelectTab(DashboardTab::Distribution)),
        KeyCode::Char('3') => Some(AppMsg::SelectTab(DashboardTab::Reviews)),
        KeyCode::Char('4') => Some(AppMsg::SelectTab(DashboardTab::Accuracy)),
        KeyCode::Char('5') => Some(AppMsg::SelectTab(DashboardTab::TopWords)),
        KeyCode::Char('b') => Some(AppMsg::CycleBrand),
        KeyCode::Char('s') => Some(AppMsg::CycleSentiment),
        KeyCode::Esc => Some(AppMsg::ResetFilters),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(AppMsg::IncreaseLimit),
        KeyCode::Char('-') => Some(AppMsg::DecreaseLimit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppMsg::Quit)]
    #[case::next_tab(KeyCode::Tab, AppMsg::NextTab)]
    #[case::direct_tab(KeyCode::Char('4'), AppMsg::SelectTab(DashboardTab::Accuracy))]
    #[case::brand(KeyCode::Char('b'), AppMsg::CycleBrand)]
    #[case::sentiment(KeyCode::Char('s'), AppMsg::CycleSentiment)]
    #[case::reset(KeyCode::Esc, AppMsg::ResetFilters)]
    #[case::more(KeyCode::Char('+'), AppMsg::IncreaseLimit)]
    #[case::fewer(KeyCode::Char('-'), AppMsg::DecreaseLimit)]
    #[case::down(KeyCode::Char('j'), AppMsg::CursorDown)]
    #[case::help(KeyCode::Char('?'), AppMsg::ToggleHelp)]
    fn maps_known_keys(#[case] code: KeyCode, #[case] expected: AppMsg) {
        assert_eq!(map_key_to_message(&key(code)), Some(expected));
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(map_key_to_message(&key(KeyCode::Char('z'))), None);
    }
}

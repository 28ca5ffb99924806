//! Find bar key table
//!
//! Maps a key pressed while the find bar has focus to a command. Kept free of
//! state so the table can be checked without a running event loop.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key pressed in the find bar asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
    /// Hide the bar and clear highlights
    Dismiss,
    FindNext,
    FindPrevious,
    /// Let the page scroll while the bar keeps focus
    ForwardToSurface,
    /// Ordinary text editing
    Edit,
}

/// Shift or Alt reverses Enter. Terminals without the keyboard enhancement
/// protocol report Shift+Enter as plain Enter, Alt+Enter arrives intact.
pub fn route_overlay_key(key: &KeyEvent) -> OverlayCommand {
    match key.code {
        KeyCode::Esc => OverlayCommand::Dismiss,
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            OverlayCommand::FindPrevious
        }
        KeyCode::Enter => OverlayCommand::FindNext,
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
            OverlayCommand::ForwardToSurface
        }
        _ => OverlayCommand::Edit,
    }
}

#[cfg(test)]
#[path = "overlay_events_tests.rs"]
mod overlay_events_tests;

//! Keyboard routing
//!
//! Decides, from the current focus and the key alone, which part of a
//! searchable surface handles a key press. The surface applies the decision;
//! nothing here touches state.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::overlay::{OverlayCommand, route_overlay_key};

/// Which part of the composite holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The composite itself (before any child was focused)
    Host,
    Surface,
    Overlay,
}

/// What the composite does with a key it receives directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    ShowSearch,
    /// Leave the key for the embedder
    Ignore,
}

/// Where a key press goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    Overlay(OverlayCommand),
    /// Deliver to the rendering surface; keys it ignores bubble to
    /// [`route_host_key`]
    Surface,
    Host(HostCommand),
}

pub fn route_key(focus: Focus, key: &KeyEvent, trigger: char) -> KeyRoute {
    match focus {
        Focus::Overlay => KeyRoute::Overlay(route_overlay_key(key)),
        Focus::Surface => KeyRoute::Surface,
        Focus::Host => KeyRoute::Host(route_host_key(key, trigger)),
    }
}

/// The trigger opens search; Shift is tolerated for layouts that need it
pub fn route_host_key(key: &KeyEvent, trigger: char) -> HostCommand {
    let plain = (key.modifiers - KeyModifiers::SHIFT).is_empty();
    match key.code {
        KeyCode::Char(c) if c == trigger && plain => HostCommand::ShowSearch,
        _ => HostCommand::Ignore,
    }
}

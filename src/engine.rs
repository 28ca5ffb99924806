//! Rendering engine contract
//!
//! The surface never looks inside page content. Everything it needs from the
//! embedded engine goes through [`RenderingEngine`], and everything the engine
//! wants to report comes back as queued [`EngineEvent`]s.

use bitflags::bitflags;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

bitflags! {
    /// Options for a find-in-page request. The empty set searches forward,
    /// case-insensitively, and stops at the end of the document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FindFlags: u8 {
        const BACKWARD = 1 << 0;
        const CASE_SENSITIVE = 1 << 1;
        const WRAP_AROUND = 1 << 2;
    }
}

/// Kind of view the engine asks for when content opens a new window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    BrowserTab,
    BackgroundTab,
    BrowserWindow,
    Dialog,
}

/// Notifications queued by an engine until the surface drains them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Navigation completed; `false` when the page could not be loaded
    LoadFinished(bool),
    UrlChanged(String),
    TitleChanged(String),
    /// Pointer entered a link; an empty string means it left one
    LinkHovered(String),
    /// Content asked for a new top-level view (e.g. `target="_blank"`)
    NewWindowRequested(WindowType),
}

/// The embedded content engine a [`RenderingSurface`](crate::surface::RenderingSurface)
/// delegates to.
pub trait RenderingEngine {
    fn load(&mut self, url: &str);
    fn url(&self) -> &str;
    fn title(&self) -> &str;

    fn back(&mut self);
    fn forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;

    /// Highlights `text` and moves the selection to the next occurrence in the
    /// direction given by `flags`. Wrap-around and highlighting are the engine's job.
    fn find_text(&mut self, text: &str, flags: FindFlags);
    fn clear_find(&mut self);

    /// Applies a display scale where `1.0` is the neutral size.
    fn set_zoom_scale(&mut self, scale: f64);

    /// Link target under a screen position, if any
    fn link_at(&self, column: u16, row: u16) -> Option<String>;

    /// Returns `true` when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
    fn handle_mouse(&mut self, mouse: MouseEvent);

    fn resize(&mut self, area: Rect);
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Creates the engine behind a new view. Must always return a usable
    /// engine so requested navigations are not dropped.
    fn create_window(&mut self, kind: WindowType) -> Self
    where
        Self: Sized;

    /// Drains queued notifications in the order they happened.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}

/// Local resources are bundled (`qrc:`) or on disk (`file:`)
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("file:") || url.starts_with("qrc:")
}

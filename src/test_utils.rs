//! Shared test utilities for docsurface
//!
//! This module provides a recording engine double and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;

    use ratatui::Frame;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use crate::config::Config;
    use crate::engine::{EngineEvent, FindFlags, RenderingEngine, WindowType};
    use crate::searchable::SearchableSurface;

    /// Every engine entry point the surface can hit
    #[derive(Debug, Clone, PartialEq)]
    pub enum EngineCall {
        Load(String),
        Back,
        Forward,
        Find(String, FindFlags),
        ClearFind,
        ZoomScale(f64),
        Key(KeyCode),
        Mouse(MouseEventKind),
        Resize(Rect),
        CreateWindow(WindowType),
    }

    /// Engine double that records calls and keeps a minimal history
    #[derive(Debug, Default)]
    pub struct MockEngine {
        pub calls: Vec<EngineCall>,
        pub history: Vec<String>,
        pub index: usize,
        /// Link targets by (column, row)
        pub links: HashMap<(u16, u16), String>,
        /// Whether `handle_key` reports keys as consumed
        pub consumes_keys: bool,
        pub pending: Vec<EngineEvent>,
        pub zoom_scale: f64,
        url: String,
        title: String,
    }

    impl MockEngine {
        pub fn new() -> Self {
            Self {
                zoom_scale: 1.0,
                ..Self::default()
            }
        }

        pub fn with_link(mut self, column: u16, row: u16, target: &str) -> Self {
            self.links.insert((column, row), target.to_string());
            self
        }

        pub fn find_calls(&self) -> Vec<(String, FindFlags)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    EngineCall::Find(text, flags) => Some((text.clone(), *flags)),
                    _ => None,
                })
                .collect()
        }

        pub fn clear_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, EngineCall::ClearFind))
                .count()
        }

        pub fn key_calls(&self) -> Vec<KeyCode> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    EngineCall::Key(code) => Some(*code),
                    _ => None,
                })
                .collect()
        }

        pub fn mouse_calls(&self) -> Vec<MouseEventKind> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    EngineCall::Mouse(kind) => Some(*kind),
                    _ => None,
                })
                .collect()
        }

        fn navigate_to(&mut self, index: usize) {
            self.index = index;
            self.url = self.history[index].clone();
            self.title = format!("Title of {}", self.url);
            self.pending.push(EngineEvent::UrlChanged(self.url.clone()));
            self.pending.push(EngineEvent::TitleChanged(self.title.clone()));
            self.pending.push(EngineEvent::LoadFinished(true));
        }
    }

    impl RenderingEngine for MockEngine {
        fn load(&mut self, url: &str) {
            self.calls.push(EngineCall::Load(url.to_string()));
            if !self.history.is_empty() {
                self.history.truncate(self.index + 1);
            }
            self.history.push(url.to_string());
            self.navigate_to(self.history.len() - 1);
        }

        fn url(&self) -> &str {
            &self.url
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn back(&mut self) {
            self.calls.push(EngineCall::Back);
            if self.can_go_back() {
                self.navigate_to(self.index - 1);
            }
        }

        fn forward(&mut self) {
            self.calls.push(EngineCall::Forward);
            if self.can_go_forward() {
                self.navigate_to(self.index + 1);
            }
        }

        fn can_go_back(&self) -> bool {
            self.index > 0
        }

        fn can_go_forward(&self) -> bool {
            self.index + 1 < self.history.len()
        }

        fn find_text(&mut self, text: &str, flags: FindFlags) {
            self.calls.push(EngineCall::Find(text.to_string(), flags));
        }

        fn clear_find(&mut self) {
            self.calls.push(EngineCall::ClearFind);
        }

        fn set_zoom_scale(&mut self, scale: f64) {
            self.zoom_scale = scale;
            self.calls.push(EngineCall::ZoomScale(scale));
        }

        fn link_at(&self, column: u16, row: u16) -> Option<String> {
            self.links.get(&(column, row)).cloned()
        }

        fn handle_key(&mut self, key: KeyEvent) -> bool {
            self.calls.push(EngineCall::Key(key.code));
            self.consumes_keys
        }

        fn handle_mouse(&mut self, mouse: MouseEvent) {
            self.calls.push(EngineCall::Mouse(mouse.kind));
        }

        fn resize(&mut self, area: Rect) {
            self.calls.push(EngineCall::Resize(area));
        }

        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}

        fn create_window(&mut self, kind: WindowType) -> Self {
            self.calls.push(EngineCall::CreateWindow(kind));
            MockEngine::new()
        }

        fn poll_events(&mut self) -> Vec<EngineEvent> {
            std::mem::take(&mut self.pending)
        }
    }

    /// Composite over a fresh mock engine with default config
    pub fn test_surface() -> SearchableSurface<MockEngine> {
        SearchableSurface::new(MockEngine::new(), &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        mouse_with_mods(kind, column, row, KeyModifiers::NONE)
    }

    pub fn mouse_with_mods(
        kind: MouseEventKind,
        column: u16,
        row: u16,
        modifiers: KeyModifiers,
    ) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }

    pub fn press(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(button), column, row)
    }

    pub fn release(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(button), column, row)
    }
}

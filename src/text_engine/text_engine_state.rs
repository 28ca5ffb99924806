use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::document::Document;
use super::matcher::{FindMatcher, Match};
use super::pages::{error_page, resolve};
use super::viewport::Viewport;
use crate::engine::{EngineEvent, FindFlags, RenderingEngine, WindowType};

/// Lines moved per wheel notch
const WHEEL_STEP: u16 = 3;

/// Find-in-page state: the active query and where its matches are
#[derive(Debug, Default)]
pub(super) struct FindState {
    pub query: String,
    pub case_sensitive: bool,
    pub matches: Vec<Match>,
    pub current: Option<usize>,
}

impl FindState {
    fn step(&mut self, flags: FindFlags) {
        let last = match self.matches.len() {
            0 => {
                self.current = None;
                return;
            }
            len => len - 1,
        };
        let wrap = flags.contains(FindFlags::WRAP_AROUND);

        self.current = Some(match (self.current, flags.contains(FindFlags::BACKWARD)) {
            (None, false) => 0,
            (None, true) => last,
            (Some(i), false) if i < last => i + 1,
            (Some(_), false) if wrap => 0,
            (Some(i), true) if i > 0 => i - 1,
            (Some(_), true) if wrap => last,
            (Some(i), _) => i,
        });
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current.and_then(|i| self.matches.get(i))
    }
}

/// Plain-text engine with session history, link navigation and find
#[derive(Debug)]
pub struct TextEngine {
    history: Vec<String>,
    index: usize,
    url: String,
    pub(super) document: Document,
    pub(super) viewport: Viewport,
    pub(super) find: FindState,
    pub(super) area: Rect,
    zoom_scale: f64,
    hovered: Option<String>,
    pending: Vec<EngineEvent>,
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            index: 0,
            url: String::new(),
            document: Document::default(),
            viewport: Viewport::new(),
            find: FindState::default(),
            area: Rect::default(),
            zoom_scale: 1.0,
            hovered: None,
            pending: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scroll_offset(&self) -> u16 {
        self.viewport.offset
    }

    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn matches(&self) -> &[Match] {
        &self.find.matches
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.find.current_match()
    }

    /// Where the page text is drawn. Zooming in narrows a centered column;
    /// zooming out keeps the full width.
    pub fn content_area(&self) -> Rect {
        if self.zoom_scale <= 1.0 {
            return self.area;
        }

        let width = ((self.area.width as f64 / self.zoom_scale).round() as u16)
            .max(1)
            .min(self.area.width);
        Rect {
            x: self.area.x + (self.area.width - width) / 2,
            width,
            ..self.area
        }
    }

    fn show(&mut self, url: &str) {
        let (document, ok) = match resolve(url) {
            Ok(document) => (document, true),
            Err(error) => {
                #[cfg(debug_assertions)]
                log::debug!("TextEngine: failed to load {}: {}", url, error);

                (error_page(url, &error), false)
            }
        };

        self.url = url.to_string();
        self.document = document;
        self.find = FindState::default();
        self.hovered = None;
        self.viewport.jump_to_top();
        self.update_bounds();

        self.pending.push(EngineEvent::UrlChanged(self.url.clone()));
        self.pending
            .push(EngineEvent::TitleChanged(self.document.title.clone()));
        self.pending.push(EngineEvent::LoadFinished(ok));
    }

    fn update_bounds(&mut self) {
        let height = self.content_area().height;
        self.viewport
            .update_bounds(self.document.line_count(), height);
    }

    fn update_hover(&mut self, column: u16, row: u16) {
        let link = self.link_at(column, row);
        if link != self.hovered {
            self.pending
                .push(EngineEvent::LinkHovered(link.clone().unwrap_or_default()));
            self.hovered = link;
        }
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderingEngine for TextEngine {
    fn load(&mut self, url: &str) {
        if !self.history.is_empty() {
            self.history.truncate(self.index + 1);
        }
        self.history.push(url.to_string());
        self.index = self.history.len() - 1;
        self.show(url);
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.document.title
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.index -= 1;
            let url = self.history[self.index].clone();
            self.show(&url);
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.index += 1;
            let url = self.history[self.index].clone();
            self.show(&url);
        }
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    fn find_text(&mut self, text: &str, flags: FindFlags) {
        let case_sensitive = flags.contains(FindFlags::CASE_SENSITIVE);

        if text != self.find.query || case_sensitive != self.find.case_sensitive {
            self.find = FindState {
                query: text.to_string(),
                case_sensitive,
                matches: FindMatcher::find_all(&self.document.lines, text, case_sensitive),
                current: None,
            };
        }
        self.find.step(flags);

        if let Some(line) = self.find.current_match().map(|m| m.line) {
            self.viewport.reveal(line);
        }
    }

    fn clear_find(&mut self) {
        self.find = FindState::default();
    }

    fn set_zoom_scale(&mut self, scale: f64) {
        self.zoom_scale = scale;
        self.update_bounds();
    }

    fn link_at(&self, column: u16, row: u16) -> Option<String> {
        let content = self.content_area();
        if !content.contains(Position::new(column, row)) {
            return None;
        }

        let line = self.viewport.offset as u32 + (row - content.y) as u32;
        self.document
            .link_at_column(line, column - content.x)
            .map(|link| link.target.clone())
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.viewport.scroll_up(1),
            KeyCode::Down => self.viewport.scroll_down(1),
            KeyCode::PageUp => self.viewport.page_up(),
            KeyCode::PageDown => self.viewport.page_down(),
            KeyCode::Home => self.viewport.jump_to_top(),
            KeyCode::End => self.viewport.jump_to_bottom(),
            _ => return false,
        }
        true
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.update_hover(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(target) = self.link_at(mouse.column, mouse.row) {
                    self.load(&target);
                }
            }
            MouseEventKind::ScrollUp => self.viewport.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.viewport.scroll_down(WHEEL_STEP),
            _ => {}
        }
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
        self.update_bounds();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area != self.area {
            self.resize(area);
        }
        self.render_page(frame);
    }

    fn create_window(&mut self, _kind: WindowType) -> Self {
        TextEngine::new()
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending)
    }
}

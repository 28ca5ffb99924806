use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent};
use ratatui::layout::Rect;

use super::pointer::{PointerGesture, PointerOutcome, classify};
use super::zoom::{clamp_zoom, zoom_scale};
use crate::engine::{EngineEvent, FindFlags, RenderingEngine, WindowType};

/// One engine page plus the per-view zoom factor and pointer state
pub struct RenderingSurface<E: RenderingEngine> {
    engine: E,
    zoom_factor: i32,
    /// Zoom given to surfaces created through `create_window`
    default_zoom: i32,
    /// Link under the pointer at the last left/middle press
    clicked_link: Option<String>,
    geometry: Rect,
}

impl<E: RenderingEngine> RenderingSurface<E> {
    pub fn new(engine: E, zoom_factor: i32) -> Self {
        let zoom_factor = clamp_zoom(zoom_factor);
        let mut surface = Self {
            engine,
            zoom_factor,
            default_zoom: zoom_factor,
            clicked_link: None,
            geometry: Rect::default(),
        };
        surface.apply_zoom();
        surface
    }

    pub fn load(&mut self, url: &str) {
        #[cfg(debug_assertions)]
        log::debug!("Surface: load {}", url);

        self.engine.load(url);
    }

    pub fn zoom_factor(&self) -> i32 {
        self.zoom_factor
    }

    /// Stores the clamped factor and applies it to the page right away
    pub fn set_zoom_factor(&mut self, value: i32) {
        self.zoom_factor = clamp_zoom(value);
        self.apply_zoom();

        #[cfg(debug_assertions)]
        log::debug!("Surface: zoom factor {} (requested {})", self.zoom_factor, value);
    }

    fn apply_zoom(&mut self) {
        self.engine.set_zoom_scale(zoom_scale(self.zoom_factor));
    }

    pub fn back(&mut self) {
        if self.engine.can_go_back() {
            self.engine.back();
        }
    }

    pub fn forward(&mut self) {
        if self.engine.can_go_forward() {
            self.engine.forward();
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.engine.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.engine.can_go_forward()
    }

    pub fn find_text(&mut self, text: &str, flags: FindFlags) {
        self.engine.find_text(text, flags);
    }

    pub fn clear_find(&mut self) {
        self.engine.clear_find();
    }

    pub fn url(&self) -> &str {
        self.engine.url()
    }

    pub fn title(&self) -> &str {
        self.engine.title()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.engine.handle_key(key)
    }

    /// Intercepts link-open and zoom gestures, forwarding everything else
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> PointerOutcome {
        match classify(&mouse) {
            PointerGesture::Press(button) => {
                self.clicked_link = self.engine.link_at(mouse.column, mouse.row);
                if button == MouseButton::Middle && self.clicked_link.is_some() {
                    return PointerOutcome::Consumed;
                }
            }
            PointerGesture::OpenRelease => {
                if let Some(link) = self.clicked_link.take() {
                    let released_on = self.engine.link_at(mouse.column, mouse.row);
                    if released_on.as_deref() == Some(link.as_str()) {
                        #[cfg(debug_assertions)]
                        log::debug!("Surface: open in new view {}", link);
                        return PointerOutcome::OpenInNewView(link);
                    }
                }
            }
            PointerGesture::PlainRelease => {
                self.clicked_link = None;
            }
            PointerGesture::ZoomStep(step) => {
                self.set_zoom_factor(self.zoom_factor + step);
                return PointerOutcome::Zoomed(self.zoom_factor);
            }
            PointerGesture::Other => {}
        }

        self.engine.handle_mouse(mouse);
        PointerOutcome::Forwarded
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn resize(&mut self, area: Rect) {
        self.geometry = area;
        self.engine.resize(area);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.engine.render(frame, self.geometry);
    }

    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.engine.poll_events()
    }

    /// Builds the surface for an engine new-window request
    pub fn create_window(&mut self, kind: WindowType) -> RenderingSurface<E> {
        RenderingSurface::new(self.engine.create_window(kind), self.default_zoom)
    }

    pub fn page(&self) -> &E {
        &self.engine
    }

    pub fn page_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Swaps in a new page and returns the old one. The zoom factor and
    /// geometry belong to the surface and carry over to the new page.
    pub fn set_page(&mut self, page: E) -> E {
        let old = std::mem::replace(&mut self.engine, page);
        self.clicked_link = None;
        self.apply_zoom();
        self.engine.resize(self.geometry);
        old
    }

    #[cfg(test)]
    pub(crate) fn clicked_link(&self) -> Option<&str> {
        self.clicked_link.as_deref()
    }
}

use ratatui::layout::Rect;

use crate::config::Config;
use crate::engine::{FindFlags, RenderingEngine, WindowType};
use crate::overlay::SearchOverlay;
use crate::router::Focus;
use crate::signals::{Signals, SubscriberId, SurfaceSignal};
use crate::surface::RenderingSurface;

/// Per-surface settings taken from [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSettings {
    pub trigger: char,
    pub overlay_width: u16,
    pub frame_width: u16,
    pub default_zoom: i32,
}

impl SurfaceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            trigger: config.search.trigger,
            overlay_width: config.search.overlay_width,
            frame_width: config.layout.frame_width,
            default_zoom: config.zoom.initial_factor(),
        }
    }
}

/// A rendering surface with an incremental find bar on top.
///
/// Owns both children. The find bar is either hidden or visible with
/// keyboard focus; showing it focuses it and hiding it hands focus back to
/// the surface.
pub struct SearchableSurface<E: RenderingEngine> {
    pub(super) surface: RenderingSurface<E>,
    pub(super) overlay: SearchOverlay,
    pub(super) focus: Focus,
    pub(super) settings: SurfaceSettings,
    pub(super) geometry: Rect,
    pub(super) tooltip: Option<String>,
    pub(super) signals: Signals,
    /// Surfaces built for engine new-window requests, waiting for the embedder
    pub(super) new_surfaces: Vec<SearchableSurface<E>>,
}

impl<E: RenderingEngine> SearchableSurface<E> {
    pub fn new(engine: E, config: &Config) -> Self {
        let settings = SurfaceSettings::from_config(config);
        Self::with_surface(RenderingSurface::new(engine, settings.default_zoom), settings)
    }

    pub(super) fn with_surface(surface: RenderingSurface<E>, settings: SurfaceSettings) -> Self {
        Self {
            surface,
            overlay: SearchOverlay::new(settings.overlay_width),
            focus: Focus::Host,
            settings,
            geometry: Rect::default(),
            tooltip: None,
            signals: Signals::new(),
            new_surfaces: Vec::new(),
        }
    }

    pub fn load(&mut self, url: &str) {
        self.surface.load(url);
    }

    /// Gives keyboard focus to the rendering surface. An open find bar is
    /// dismissed first so it never stays visible without focus.
    pub fn focus(&mut self) {
        self.hide_search_bar();
        self.focus = Focus::Surface;
    }

    pub fn focus_state(&self) -> Focus {
        self.focus
    }

    pub fn back(&mut self) {
        self.surface.back();
    }

    pub fn forward(&mut self) {
        self.surface.forward();
    }

    pub fn can_go_back(&self) -> bool {
        self.surface.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.surface.can_go_forward()
    }

    pub fn zoom_factor(&self) -> i32 {
        self.surface.zoom_factor()
    }

    pub fn set_zoom_factor(&mut self, value: i32) {
        self.surface.set_zoom_factor(value);
    }

    pub fn url(&self) -> &str {
        self.surface.url()
    }

    pub fn title(&self) -> &str {
        self.surface.title()
    }

    pub fn page(&self) -> &E {
        self.surface.page()
    }

    pub fn page_mut(&mut self) -> &mut E {
        self.surface.page_mut()
    }

    /// Attaches a new page and returns the old one.
    ///
    /// Notifications still queued by the old page leave with it, so hover
    /// hints and navigation signals come from the new page only.
    pub fn set_page(&mut self, page: E) -> E {
        #[cfg(debug_assertions)]
        log::debug!("SearchableSurface: attaching new page");

        let old = self.surface.set_page(page);
        self.set_tooltip(None);
        self.overlay
            .reposition(self.geometry, self.settings.frame_width);
        old
    }

    pub fn surface(&self) -> &RenderingSurface<E> {
        &self.surface
    }

    pub fn overlay(&self) -> &SearchOverlay {
        &self.overlay
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Hover hint for the embedder's status line
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_search_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Opens the find bar and focuses it. A previous query is selected and
    /// searched again; calling this while visible repeats that search.
    pub fn show_search_bar(&mut self) {
        let previous = self.overlay.show();
        self.focus = Focus::Overlay;
        self.overlay
            .reposition(self.geometry, self.settings.frame_width);

        #[cfg(debug_assertions)]
        log::debug!("Search: shown (previous query {:?})", previous);

        if let Some(query) = previous {
            self.find(&query);
        }
    }

    /// Hides the find bar and clears highlights. No-op when already hidden.
    pub fn hide_search_bar(&mut self) {
        if !self.overlay.hide() {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Search: hidden (query was '{}')", self.overlay.query());

        self.focus = Focus::Surface;
        self.surface.clear_find();
    }

    /// Sets the find text as if typed, searching when it changed
    pub fn set_search_text(&mut self, text: &str) {
        if self.overlay.set_text(text) {
            self.find(text);
        }
    }

    /// Incremental search: empty text only clears highlights
    pub(super) fn find(&mut self, text: &str) {
        if text.is_empty() {
            self.surface.clear_find();
            return;
        }
        self.surface.find_text(text, FindFlags::WRAP_AROUND);
    }

    pub(super) fn find_next(&mut self, backward: bool) {
        let text = self.overlay.query().to_string();
        if text.is_empty() {
            return;
        }

        let mut flags = FindFlags::WRAP_AROUND;
        if backward {
            flags |= FindFlags::BACKWARD;
        }
        self.surface.find_text(&text, flags);
    }

    pub(super) fn set_tooltip(&mut self, tooltip: Option<String>) {
        if self.tooltip == tooltip {
            return;
        }
        self.tooltip = tooltip.clone();
        self.signals.emit(SurfaceSignal::ToolTipChanged(tooltip));
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SurfaceSignal) + 'static) -> SubscriberId {
        self.signals.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.signals.unsubscribe(id)
    }

    /// Hands over surfaces created for engine new-window requests
    pub fn take_new_surfaces(&mut self) -> Vec<SearchableSurface<E>> {
        std::mem::take(&mut self.new_surfaces)
    }

    /// Builds a sibling composite around the engine's new window, with the
    /// same find bar settings
    pub fn create_window(&mut self, kind: WindowType) -> SearchableSurface<E> {
        SearchableSurface::with_surface(self.surface.create_window(kind), self.settings)
    }
}

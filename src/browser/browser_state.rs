use std::sync::mpsc::{Receiver, Sender, channel};

use crate::config::Config;
use crate::engine::{RenderingEngine, WindowType};
use crate::notification::NotificationState;
use crate::searchable::SearchableSurface;
use crate::signals::SurfaceSignal;

/// Stable identity of a view, independent of its position in the tab list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub usize);

pub(super) struct Tab<E: RenderingEngine> {
    pub id: TabId,
    pub surface: SearchableSurface<E>,
}

pub struct Browser<E: RenderingEngine> {
    pub(super) tabs: Vec<Tab<E>>,
    pub(super) active: usize,
    pub(super) default_zoom: i32,
    pub notification: NotificationState,
    signal_tx: Sender<(TabId, SurfaceSignal)>,
    signal_rx: Receiver<(TabId, SurfaceSignal)>,
    next_id: usize,
    pub(super) should_quit: bool,
}

impl<E: RenderingEngine> Browser<E> {
    /// Opens a single focused view on `url`
    pub fn new(engine: E, url: &str, config: &Config) -> Self {
        let (signal_tx, signal_rx) = channel();
        let mut browser = Self {
            tabs: Vec::new(),
            active: 0,
            default_zoom: config.zoom.initial_factor(),
            notification: NotificationState::new(),
            signal_tx,
            signal_rx,
            next_id: 0,
            should_quit: false,
        };

        let mut surface = SearchableSurface::new(engine, config);
        surface.load(url);
        surface.focus();
        browser.adopt(surface);
        browser
    }

    /// Wires a surface's signals into the shell and appends it
    pub(super) fn adopt(&mut self, mut surface: SearchableSurface<E>) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;

        let tx = self.signal_tx.clone();
        surface.subscribe(move |signal| {
            let _ = tx.send((id, signal.clone()));
        });

        self.tabs.push(Tab { id, surface });
        id
    }

    /// Opens `url` in a new view behind the active one
    pub fn open_in_background(&mut self, url: &str) -> TabId {
        #[cfg(debug_assertions)]
        log::debug!("Browser: opening {} in the background", url);

        let mut surface = self
            .active_surface_mut()
            .create_window(WindowType::BackgroundTab);
        surface.load(url);
        self.adopt(surface)
    }

    /// Drains engine notifications and applies the resulting signals
    pub fn tick(&mut self) {
        let mut created = Vec::new();
        for tab in &mut self.tabs {
            tab.surface.pump_engine_events();
            created.extend(tab.surface.take_new_surfaces());
        }
        for surface in created {
            self.adopt(surface);
        }

        while let Ok((id, signal)) = self.signal_rx.try_recv() {
            self.handle_signal(id, signal);
        }
    }

    fn handle_signal(&mut self, id: TabId, signal: SurfaceSignal) {
        match signal {
            SurfaceSignal::LinkClicked(url) => {
                self.open_in_background(&url);
                self.notification
                    .show(&format!("Opened in background: {}", url));
            }
            SurfaceSignal::LoadFinished { ok: false } => {
                if let Some(tab) = self.tabs.iter().find(|tab| tab.id == id) {
                    let message = format!("Failed to load {}", tab.surface.url());
                    self.notification.show_warning(&message);
                }
            }
            SurfaceSignal::NewSurfaceCreated(_) => {
                self.notification.show("Opened a new view");
            }
            SurfaceSignal::UrlChanged(_)
            | SurfaceSignal::TitleChanged(_)
            | SurfaceSignal::ToolTipChanged(_)
            | SurfaceSignal::LoadFinished { ok: true } => {}
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> TabId {
        self.tabs[self.active].id
    }

    pub fn active_surface(&self) -> &SearchableSurface<E> {
        &self.tabs[self.active].surface
    }

    pub fn active_surface_mut(&mut self) -> &mut SearchableSurface<E> {
        &mut self.tabs[self.active].surface
    }

    pub fn surface(&self, index: usize) -> Option<&SearchableSurface<E>> {
        self.tabs.get(index).map(|tab| &tab.surface)
    }

    /// Moves to the next view, wrapping to the first
    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
        self.active_surface_mut().focus();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

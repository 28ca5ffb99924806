//! Event handling for the searchable surface
//!
//! Applies the routing decisions from [`crate::router`] and turns engine
//! notifications into outward signals.

use ratatui::crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::searchable_state::SearchableSurface;
use crate::engine::{EngineEvent, RenderingEngine, is_local_url};
use crate::overlay::OverlayCommand;
use crate::router::{Focus, HostCommand, KeyRoute, route_host_key, route_key};
use crate::signals::SurfaceSignal;
use crate::surface::PointerOutcome;

/// Whether a key was used or left for the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Accepted,
    Ignored,
}

impl<E: RenderingEngine> SearchableSurface<E> {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyDisposition {
        match route_key(self.focus, &key, self.settings.trigger) {
            KeyRoute::Overlay(command) => {
                self.apply_overlay_command(command, key);
                KeyDisposition::Accepted
            }
            KeyRoute::Surface => {
                if self.surface.handle_key(key) {
                    KeyDisposition::Accepted
                } else {
                    // Unhandled keys bubble up to the composite
                    self.apply_host_command(route_host_key(&key, self.settings.trigger))
                }
            }
            KeyRoute::Host(command) => self.apply_host_command(command),
        }
    }

    fn apply_host_command(&mut self, command: HostCommand) -> KeyDisposition {
        match command {
            HostCommand::ShowSearch => {
                self.show_search_bar();
                KeyDisposition::Accepted
            }
            HostCommand::Ignore => KeyDisposition::Ignored,
        }
    }

    fn apply_overlay_command(&mut self, command: OverlayCommand, key: KeyEvent) {
        match command {
            OverlayCommand::Dismiss => self.hide_search_bar(),
            OverlayCommand::FindNext => self.find_next(false),
            OverlayCommand::FindPrevious => self.find_next(true),
            OverlayCommand::ForwardToSurface => {
                self.surface.handle_key(key);
            }
            OverlayCommand::Edit => {
                if self.overlay.handle_edit(key) {
                    let query = self.overlay.query().to_string();

                    #[cfg(debug_assertions)]
                    log::debug!("Search: query changed to '{}'", query);

                    self.find(&query);
                }
            }
        }
    }

    /// Routes a pointer event. Clicks on the find bar stay there; everything
    /// inside the surface goes through its link and zoom interception.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> PointerOutcome {
        let position = Position::new(mouse.column, mouse.row);

        if self.overlay.is_visible() && self.overlay.area().contains(position) {
            return PointerOutcome::Consumed;
        }
        if !self.surface.geometry().contains(position) {
            return PointerOutcome::Ignored;
        }

        // A press focuses the surface unless the find bar holds focus
        if matches!(mouse.kind, MouseEventKind::Down(_)) && self.focus == Focus::Host {
            self.focus = Focus::Surface;
        }

        let outcome = self.surface.handle_mouse(mouse);
        if let PointerOutcome::OpenInNewView(url) = &outcome {
            self.signals.emit(SurfaceSignal::LinkClicked(url.clone()));
        }
        outcome
    }

    /// Fills `area` with the surface and re-anchors the find bar
    pub fn resize(&mut self, area: Rect) {
        self.geometry = area;
        self.surface.resize(area);
        self.overlay.reposition(area, self.settings.frame_width);
    }

    /// Drains the page's notifications and re-emits them outward
    pub fn pump_engine_events(&mut self) {
        for event in self.surface.poll_events() {
            match event {
                EngineEvent::LoadFinished(ok) => {
                    self.overlay
                        .reposition(self.geometry, self.settings.frame_width);
                    self.signals.emit(SurfaceSignal::LoadFinished { ok });
                }
                EngineEvent::UrlChanged(url) => {
                    self.signals.emit(SurfaceSignal::UrlChanged(url));
                }
                EngineEvent::TitleChanged(title) => {
                    self.signals.emit(SurfaceSignal::TitleChanged(title));
                }
                EngineEvent::LinkHovered(link) => self.link_hovered(link),
                EngineEvent::NewWindowRequested(kind) => {
                    #[cfg(debug_assertions)]
                    log::debug!("SearchableSurface: new window requested ({:?})", kind);

                    let surface = self.create_window(kind);
                    self.new_surfaces.push(surface);
                    self.signals.emit(SurfaceSignal::NewSurfaceCreated(kind));
                }
            }
        }
    }

    /// Remote links show up in the hint, local ones leave it unchanged
    fn link_hovered(&mut self, link: String) {
        if link.is_empty() {
            self.set_tooltip(None);
        } else if !is_local_url(&link) {
            self.set_tooltip(Some(link));
        }
    }
}

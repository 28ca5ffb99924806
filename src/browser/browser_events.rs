use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};

use super::browser_state::Browser;
use crate::engine::RenderingEngine;
use crate::searchable::KeyDisposition;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl<E: RenderingEngine> Browser<E> {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                _ => {}
            }
        }
        Ok(())
    }

    /// The active view sees keys first; whatever it ignores drives the shell
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.active_surface_mut().handle_key(key) == KeyDisposition::Accepted {
            return;
        }

        self.handle_shell_key(key);
    }

    fn handle_shell_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') if !ctrl && !alt => self.should_quit = true,
            KeyCode::Tab => self.next_tab(),
            KeyCode::Left if alt => self.active_surface_mut().back(),
            KeyCode::Backspace => self.active_surface_mut().back(),
            KeyCode::Right if alt => self.active_surface_mut().forward(),
            KeyCode::Char('+') | KeyCode::Char('=') if ctrl => self.zoom_by(1),
            KeyCode::Char('-') if ctrl => self.zoom_by(-1),
            KeyCode::Char('0') if ctrl => {
                let default_zoom = self.default_zoom;
                self.active_surface_mut().set_zoom_factor(default_zoom);
            }
            _ => {}
        }
    }

    fn zoom_by(&mut self, step: i32) {
        let surface = self.active_surface_mut();
        surface.set_zoom_factor(surface.zoom_factor() + step);
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        self.active_surface_mut().handle_mouse(mouse);
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;

use super::searchable_state::SearchableSurface;
use crate::engine::RenderingEngine;
use crate::overlay::overlay_render::render_overlay;

impl<E: RenderingEngine> SearchableSurface<E> {
    /// Paints the page into `area`, then the find bar above it. A changed
    /// area is treated as a resize.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area != self.geometry {
            self.resize(area);
        }

        self.surface.render(frame);
        render_overlay(&mut self.overlay, frame);
    }
}

/// Vertical scroll position of a page inside its content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset: u16,
    pub max_offset: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: usize, height: u16) {
        self.height = height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scrolls the least distance that puts `line` on screen
    pub fn reveal(&mut self, line: u32) {
        let line = line.min(u16::MAX as u32) as u16;
        if line < self.offset {
            self.offset = line;
        } else if self.height > 0 && line >= self.offset.saturating_add(self.height) {
            self.offset = (line - self.height + 1).min(self.max_offset);
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self, line: u32) -> bool {
        let start = self.offset as u32;
        line >= start && line < start + self.height as u32
    }
}

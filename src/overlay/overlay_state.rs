use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Height of the find bar including its border
pub const OVERLAY_HEIGHT: u16 = 3;

/// Creates a TextArea configured for find input.
fn create_find_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Find bar state: visibility, query text and placement
pub struct SearchOverlay {
    visible: bool,
    textarea: TextArea<'static>,
    /// Preferred width in columns
    width: u16,
    area: Rect,
}

impl SearchOverlay {
    pub fn new(width: u16) -> Self {
        Self {
            visible: false,
            textarea: create_find_textarea(),
            width,
            area: Rect::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the bar. Returns the previous query, fully selected, when there
    /// is one to search again.
    pub fn show(&mut self) -> Option<String> {
        self.visible = true;

        let query = self.query().to_string();
        if query.is_empty() {
            return None;
        }
        self.textarea.select_all();
        Some(query)
    }

    /// Hides the bar, keeping its text. Returns `false` if it was already hidden.
    pub fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Current query (the bar is single-line)
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn is_selecting(&self) -> bool {
        self.textarea.is_selecting()
    }

    /// Replaces the text. Returns whether the query changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        let before = self.query().to_string();
        self.replace_text(text);
        before != self.query()
    }

    /// Feeds an editing key to the input. Returns whether the query changed.
    pub fn handle_edit(&mut self, key: KeyEvent) -> bool {
        let before = self.query().to_string();
        self.textarea.input(key);

        // Keys like Ctrl+M insert line breaks; keep the query on one line
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.replace_text(&joined);
        }

        before != self.query()
    }

    /// Swaps the text without touching the user's yank buffer
    fn replace_text(&mut self, text: &str) {
        let yank = self.textarea.yank_text();
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
        self.textarea.set_yank_text(yank);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Anchors the bar to the top-right of `host`, its right edge inset by
    /// `frame_width`.
    pub fn reposition(&mut self, host: Rect, frame_width: u16) {
        let available = host.width.saturating_sub(frame_width);
        let width = self.width.min(available);
        let height = OVERLAY_HEIGHT.min(host.height);
        let x = host.right().saturating_sub(frame_width).saturating_sub(width);

        self.area = Rect::new(x, host.y, width, height);
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};
    use proptest::prelude::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_new_overlay_is_hidden_and_empty() {
        let overlay = SearchOverlay::new(32);
        assert!(!overlay.is_visible());
        assert!(overlay.query().is_empty());
    }

    #[test]
    fn test_show_without_prior_text() {
        let mut overlay = SearchOverlay::new(32);
        assert_eq!(overlay.show(), None);
        assert!(overlay.is_visible());
        assert!(!overlay.is_selecting());
    }

    #[test]
    fn test_show_with_prior_text_selects_it() {
        let mut overlay = SearchOverlay::new(32);
        overlay.set_text("zoom");
        overlay.hide();

        assert_eq!(overlay.show(), Some("zoom".to_string()));
        assert!(overlay.is_selecting());
    }

    #[test]
    fn test_typing_replaces_selected_text() {
        let mut overlay = SearchOverlay::new(32);
        overlay.set_text("old");
        overlay.show();

        assert!(overlay.handle_edit(key(KeyCode::Char('n'))));
        assert_eq!(overlay.query(), "n");
    }

    #[test]
    fn test_hide_keeps_text() {
        let mut overlay = SearchOverlay::new(32);
        overlay.show();
        overlay.set_text("query");

        assert!(overlay.hide());
        assert!(!overlay.hide());
        assert_eq!(overlay.query(), "query");
    }

    #[test]
    fn test_handle_edit_reports_changes() {
        let mut overlay = SearchOverlay::new(32);
        assert!(overlay.handle_edit(key(KeyCode::Char('a'))));
        assert!(overlay.handle_edit(key(KeyCode::Char('b'))));
        assert_eq!(overlay.query(), "ab");

        // Cursor movement leaves the query alone
        assert!(!overlay.handle_edit(key(KeyCode::Left)));

        assert!(!overlay.handle_edit(key(KeyCode::End)));
        assert!(overlay.handle_edit(key(KeyCode::Backspace)));
        assert_eq!(overlay.query(), "a");
    }

    #[test]
    fn test_set_text_same_value_is_unchanged() {
        let mut overlay = SearchOverlay::new(32);
        assert!(overlay.set_text("same"));
        assert!(!overlay.set_text("same"));
        assert!(overlay.set_text(""));
        assert!(overlay.query().is_empty());
    }

    #[test]
    fn test_set_text_keeps_yank_buffer() {
        let mut overlay = SearchOverlay::new(32);
        for ch in "keep".chars() {
            overlay.handle_edit(key(KeyCode::Char(ch)));
        }
        overlay.handle_edit(key(KeyCode::Home));
        overlay.handle_edit(key_with_mods(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(overlay.query(), "");

        overlay.set_text("find");
        overlay.handle_edit(key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL));

        assert_eq!(overlay.query(), "findkeep");
    }

    #[test]
    fn test_joining_lines_keeps_yank_buffer() {
        let mut overlay = SearchOverlay::new(32);
        overlay.textarea_mut().set_yank_text("kept");
        overlay.set_text("ab");

        // Ctrl+M inserts a line break that gets joined back
        overlay.handle_edit(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));

        assert_eq!(overlay.query(), "ab");
        assert_eq!(overlay.textarea_mut().yank_text(), "kept");
    }

    #[test]
    fn test_reposition_top_right() {
        let mut overlay = SearchOverlay::new(32);
        overlay.reposition(Rect::new(0, 0, 100, 40), 1);
        assert_eq!(overlay.area(), Rect::new(67, 0, 32, 3));
    }

    #[test]
    fn test_reposition_respects_host_origin() {
        let mut overlay = SearchOverlay::new(20);
        overlay.reposition(Rect::new(10, 5, 50, 10), 2);
        assert_eq!(overlay.area(), Rect::new(38, 5, 20, 3));
    }

    #[test]
    fn test_reposition_narrow_host_clamps_width() {
        let mut overlay = SearchOverlay::new(32);
        overlay.reposition(Rect::new(0, 0, 10, 2), 1);
        assert_eq!(overlay.area(), Rect::new(0, 0, 9, 2));
    }

    // For any host rectangle wide enough for the bar, the bar's right edge sits
    // exactly frame_width columns inside the host's right edge.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_right_edge_alignment(
            x in 0u16..200,
            y in 0u16..100,
            width in 40u16..300,
            height in 3u16..200,
            frame_width in 0u16..4,
        ) {
            let mut overlay = SearchOverlay::new(32);
            let host = Rect::new(x, y, width, height);
            overlay.reposition(host, frame_width);

            let area = overlay.area();
            prop_assert_eq!(area.right(), host.right() - frame_width);
            prop_assert_eq!(area.y, host.y);
            prop_assert_eq!(area.width, 32);
            prop_assert_eq!(area.height, OVERLAY_HEIGHT);
        }
    }
}

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
};

use super::overlay_state::SearchOverlay;

/// Paints the find bar over whatever is underneath it
pub fn render_overlay(overlay: &mut SearchOverlay, frame: &mut Frame) {
    if !overlay.is_visible() {
        return;
    }

    let area = overlay.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Clear the background to make it truly floating
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Find: ")
        .border_style(Style::default().fg(Color::LightMagenta))
        .style(Style::default().bg(Color::Black));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let textarea = overlay.textarea_mut();
    textarea.set_style(Style::default().fg(Color::White).bg(Color::Black));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(&*textarea, inner_area);
}

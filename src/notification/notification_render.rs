use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

/// Renders the current notification at the bottom-right of `area`. Call
/// after the page so it lands on top.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let notif = match notification.current() {
        Some(n) => n,
        None => return,
    };
    let colors = notif.kind.colors();

    let margin = 1;
    let content_width = notif.message.chars().count() as u16;
    let width = (content_width + 4).min(area.width.saturating_sub(margin * 2));
    let height = 3.min(area.height);

    // Don't render if area is too small
    if width < 5 || height < 3 {
        return;
    }

    let notification_area = Rect {
        x: area.right().saturating_sub(width + margin),
        y: area.bottom().saturating_sub(height),
        width,
        height,
    };

    frame.render_widget(Clear, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::browser_state::Browser;
use crate::engine::RenderingEngine;
use crate::notification::render_notification;
use crate::surface::zoom_percent;

/// Longest title shown in the tab bar
const MAX_TAB_TITLE: usize = 24;

impl<E: RenderingEngine> Browser<E> {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_tab_bar(frame, layout[0]);

        let page_area = layout[1];
        self.active_surface_mut().render(frame, page_area);
        render_notification(frame, page_area, &mut self.notification);

        self.render_status_line(frame, layout[2]);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (index, tab) in self.tabs.iter().enumerate() {
            let title = tab_title(tab.surface.title(), tab.surface.url());
            let style = if index == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", title), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Hovered link if any, otherwise the page URL; zoom on the right
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let surface = self.active_surface();
        let zoom = format!(" {}% ", zoom_percent(surface.zoom_factor()));

        let (text, style) = match surface.tooltip() {
            Some(link) => (link, Style::default().fg(Color::Cyan)),
            None => (surface.url(), Style::default().fg(Color::DarkGray)),
        };

        let layout = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(zoom.chars().count() as u16),
        ])
        .split(area);

        frame.render_widget(Paragraph::new(Span::styled(text, style)), layout[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(zoom, Style::default().fg(Color::Gray))),
            layout[1],
        );
    }
}

fn tab_title(title: &str, url: &str) -> String {
    let title = if title.is_empty() { url } else { title };
    if title.chars().count() > MAX_TAB_TITLE {
        let truncated: String = title.chars().take(MAX_TAB_TITLE - 1).collect();
        format!("{}…", truncated)
    } else {
        title.to_string()
    }
}

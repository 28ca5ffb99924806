use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::document::Link;
use super::matcher::Match;
use super::text_engine_state::TextEngine;

const LINK_FG: Color = Color::Cyan;
const MATCH_HIGHLIGHT_BG: Color = Color::Rgb(128, 128, 128);
const MATCH_HIGHLIGHT_FG: Color = Color::White;
const CURRENT_MATCH_HIGHLIGHT_BG: Color = Color::Rgb(255, 165, 0);
const CURRENT_MATCH_HIGHLIGHT_FG: Color = Color::Black;

impl TextEngine {
    pub(super) fn render_page(&self, frame: &mut Frame) {
        let content = self.content_area();
        let first = self.viewport.offset as usize;

        let lines: Vec<Line<'static>> = self
            .document
            .lines
            .iter()
            .enumerate()
            .skip(first)
            .take(content.height as usize)
            .map(|(line_idx, text)| {
                let links: Vec<&Link> = self
                    .document
                    .links
                    .iter()
                    .filter(|link| link.line as usize == line_idx)
                    .collect();
                let matches: Vec<(usize, &Match)> = self
                    .find
                    .matches
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.line as usize == line_idx)
                    .collect();

                style_line(text, &links, &matches, self.find.current)
            })
            .collect();

        frame.render_widget(Paragraph::new(Text::from(lines)), content);
    }
}

/// Styles one page line: links first, find highlights on top
fn style_line(
    text: &str,
    links: &[&Link],
    matches: &[(usize, &Match)],
    current_match: Option<usize>,
) -> Line<'static> {
    if links.is_empty() && matches.is_empty() {
        return Line::from(text.to_string());
    }

    let mut char_styles: Vec<(char, Style)> =
        text.chars().map(|ch| (ch, Style::default())).collect();

    let link_style = Style::default()
        .fg(LINK_FG)
        .add_modifier(Modifier::UNDERLINED);
    for link in links {
        paint(&mut char_styles, link.col, link.len, link_style);
    }

    for (match_idx, m) in matches {
        let highlight_style = if Some(*match_idx) == current_match {
            Style::default()
                .fg(CURRENT_MATCH_HIGHLIGHT_FG)
                .bg(CURRENT_MATCH_HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(MATCH_HIGHLIGHT_FG)
                .bg(MATCH_HIGHLIGHT_BG)
        };
        paint(&mut char_styles, m.col, m.len, highlight_style);
    }

    let mut result_spans: Vec<Span<'static>> = Vec::new();
    let mut current_text = String::new();
    let mut current_style: Option<Style> = None;

    for (ch, style) in char_styles {
        match current_style {
            Some(s) if s == style => {
                current_text.push(ch);
            }
            _ => {
                if !current_text.is_empty()
                    && let Some(s) = current_style
                {
                    result_spans.push(Span::styled(current_text.clone(), s));
                }
                current_text = ch.to_string();
                current_style = Some(style);
            }
        }
    }
    if !current_text.is_empty()
        && let Some(s) = current_style
    {
        result_spans.push(Span::styled(current_text, s));
    }

    Line::from(result_spans)
}

fn paint(char_styles: &mut [(char, Style)], col: u16, len: u16, style: Style) {
    let start = col as usize;
    let end = (start + len as usize).min(char_styles.len());
    for entry in char_styles.iter_mut().take(end).skip(start) {
        entry.1 = style;
    }
}

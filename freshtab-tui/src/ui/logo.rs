//! Wordmark at the top of the start page.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Block-glyph wordmark
const WORDMARK: &[&str] = &[
    "█▀▀ █▀█ █▀▀ █▀▀ █ █ ▀█▀ █▀█ █▀▄",
    "█▀  █▀▄ ██▄ ▄▄█ █▀█  █  █▀█ █▄█",
];

/// Renders the wordmark, falling back to plain text on narrow terminals
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let accent = Color::LightRed;
    let wide_enough = (area.width as usize) >= WORDMARK[0].chars().count();

    let mut lines: Vec<Line> = if wide_enough && area.height >= 3 {
        WORDMARK
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(accent))))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            "freshtab",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))]
    };

    lines.push(Line::from(Span::styled(
        format!("private search with {}", app.config.engine.name),
        Style::default().fg(Color::DarkGray),
    )));

    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(logo, area);
}

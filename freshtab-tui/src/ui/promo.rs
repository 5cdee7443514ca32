//! Promotional card under the grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Focus;

/// Render the promo card
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let promo = &app.config.promo;
    let focused = app.focus == Focus::Promo;
    let border_color = if focused {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let button_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            promo.body.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(format!(" {} ", promo.button), button_style)),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", promo.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(card, area);
}

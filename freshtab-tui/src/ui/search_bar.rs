//! The main search input.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::{Focus, Mode};

const PLACEHOLDER: &str = "Search the web privately...";

/// Render the search bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::Input;
    let focused = app.focus == Focus::SearchBar;
    let border_color = if editing {
        app.mode.color()
    } else if focused {
        Color::White
    } else {
        Color::DarkGray
    };

    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(Color::DarkGray))];

    if editing {
        spans.extend(super::cursor_spans(&app.search_input, app.search_cursor));
    } else if app.search_input.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            app.search_input.as_str(),
            Style::default().fg(Color::White),
        ));
    }

    if app.listening {
        spans.push(Span::styled(
            "  ● listening",
            Style::default().fg(Color::LightRed),
        ));
    } else if app.voice_available() {
        spans.push(Span::styled(
            "  ○ v",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(paragraph, area);
}

//! Bottom status line: mode, hints, clock.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::Mode;

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_color = app.mode.color();

    // Current time
    let now = Local::now();
    let time_str = now.format("%H:%M:%S").to_string();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.mode.display_name()),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if app.listening {
        spans.push(Span::styled(
            " LISTENING ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    match &app.status_message {
        Some(message) => spans.push(Span::raw(message.clone())),
        None => spans.push(Span::styled(
            hints(app),
            Style::default().fg(Color::DarkGray),
        )),
    }

    // Right-aligned time
    let width = area.width as usize;
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(used + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(time_str, Style::default().fg(Color::DarkGray)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keybind hints for the current mode and view
fn hints(app: &App) -> &'static str {
    match app.mode {
        Mode::Input => "Enter: search | Esc: cancel",
        Mode::Address => "Enter: go | Esc: cancel",
        Mode::Normal => {
            if app.router.route().is_search() {
                "e: edit | 1/2/3: vertical | o: open | [: back | H: home | q: quit"
            } else {
                "/: search | Tab: focus | Enter: open | v: voice | [: back | q: quit"
            }
        }
    }
}

//! Address bar, always in step with the router.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Mode;

/// Inert header buttons carried over from the page this mocks
const HEADER_LABELS: &str = "Images   News";

/// Render the address bar (top bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::Address;
    let border_color = if editing {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![
        Span::styled("←", arrow(app.router.can_go_back())),
        Span::raw(" "),
        Span::styled("→", arrow(app.router.can_go_forward())),
        Span::raw("  "),
    ];

    if editing {
        spans.extend(super::cursor_spans(&app.address_input, app.address_cursor));
    } else {
        spans.push(Span::styled(
            app.router.location(),
            Style::default().fg(Color::Cyan),
        ));
    }

    // Right-aligned header labels, decorative only
    if !editing {
        let inner_width = area.width.saturating_sub(2) as usize;
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = inner_width.saturating_sub(used + HEADER_LABELS.len() + 1);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            HEADER_LABELS,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" location ", Style::default().fg(Color::DarkGray))),
    );

    f.render_widget(paragraph, area);
}

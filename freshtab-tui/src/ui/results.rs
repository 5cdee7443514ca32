//! The results view.
//!
//! Nothing is fetched. The view shows which engine URL the query was
//! delegated to; opening it externally is the real "view results" action.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use freshtab_core::Vertical;

use crate::app::App;
use crate::ui::layout::Layout;

/// Render the results view for the current query
pub fn render(f: &mut Frame, area: Rect, app: &App, query: &str) {
    let column = Layout::centered_column(area, 90);
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query line
            Constraint::Length(1), // Vertical tabs
            Constraint::Min(0),    // Delegation frame
        ])
        .split(column);

    let query_line = Line::from(vec![
        Span::styled("Results for ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            query,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(query_line), chunks[0]);

    f.render_widget(Paragraph::new(vertical_tabs(app)), chunks[1]);

    render_delegation_frame(f, chunks[2], app);
}

/// One span per vertical, highlighting the active one
fn vertical_tabs(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, vertical) in Vertical::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *vertical == app.vertical {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if app.config.engine.supports(*vertical) {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(
            format!("[{}] {}", i + 1, vertical.label()),
            style,
        ));
    }
    Line::from(spans)
}

/// The stand-in for the embedded results page
fn render_delegation_frame(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.config.engine;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            engine.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    match app.results_url() {
        Some(url) => {
            lines.push(Line::from(Span::styled(
                url,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "o: open in your browser   e: edit query",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "nothing to delegate",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let frame_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", app.vertical.label()),
                    Style::default().fg(Color::Gray),
                )),
        );

    f.render_widget(frame_widget, area);
}

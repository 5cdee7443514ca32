//! Shortcut tile grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, GRID_COLS};
use crate::mode::Focus;

/// Tile height including its borders
pub const TILE_HEIGHT: u16 = 4;

/// Render the shortcut grid, add tile included
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tile_count = app.tile_count();
    let rows = tile_count.div_ceil(GRID_COLS);

    let row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Length(TILE_HEIGHT)).collect();
    let row_areas = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); GRID_COLS])
            .split(*row_area);

        for col in 0..GRID_COLS {
            let index = row * GRID_COLS + col;
            if index >= tile_count {
                break;
            }
            render_tile(f, col_areas[col], app, index);
        }
    }
}

/// Render a single tile
fn render_tile(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let focused = app.focus == Focus::Tile(index);
    let border_color = if focused {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let lines = match app.shortcut_at(index) {
        Some(shortcut) => vec![
            Line::from(Span::styled(
                format!("{} {}", shortcut.tile_glyph(), shortcut.label),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                shortcut.host().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![
            Line::from(Span::styled(
                "+",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Add", Style::default().fg(Color::DarkGray))),
        ],
    };

    let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(tile, area);
}

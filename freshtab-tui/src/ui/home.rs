//! The start page: logo, search bar, shortcut grid, promo card.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    Frame,
};

use crate::app::{App, GRID_COLS};
use crate::ui::layout::Layout;
use crate::ui::shortcuts::TILE_HEIGHT;
use crate::ui::{logo, promo, search_bar, shortcuts};

/// Render the home view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let column = Layout::centered_column(area, 72);
    let grid_height = (app.tile_count().div_ceil(GRID_COLS) as u16) * TILE_HEIGHT;

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Breathing room
            Constraint::Length(3),           // Logo
            Constraint::Length(1),           // Gap
            Constraint::Length(3),           // Search bar
            Constraint::Length(1),           // Gap
            Constraint::Length(grid_height), // Shortcut grid
            Constraint::Length(1),           // Gap
            Constraint::Length(4),           // Promo card
            Constraint::Min(0),
        ])
        .split(column);

    logo::render(f, chunks[1], app);
    search_bar::render(f, chunks[3], app);
    shortcuts::render(f, chunks[5], app);
    if app.config.promo.enabled {
        promo::render(f, chunks[7], app);
    }
}

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the page
pub struct Layout;

impl Layout {
    /// Create the main layout with address bar, content, footer and status
    /// bar
    ///
    /// Returns: (address_area, content_area, footer_area, status_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Address bar
                Constraint::Min(0),    // Page content
                Constraint::Length(1), // Footer links
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Center a column of at most `max_width` within `area`
    pub fn centered_column(area: Rect, max_width: u16) -> Rect {
        let width = area.width.min(max_width);
        let side = (area.width - width) / 2;
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(side),
                Constraint::Length(width),
                Constraint::Min(0),
            ])
            .split(area);

        chunks[1]
    }
}

//! Footer links. Like the page this mocks, they go nowhere.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const FOOTER_LINKS: &[&str] = &[
    "© Brave Software",
    "Advertise",
    "API",
    "News",
    "FAQ",
    "Privacy Policy",
    "Report a security issue",
];

/// Render the footer line
pub fn render(f: &mut Frame, area: Rect) {
    let text = FOOTER_LINKS.join("  ·  ");
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

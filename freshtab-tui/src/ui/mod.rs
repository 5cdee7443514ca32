pub mod address_bar;
pub mod footer;
pub mod home;
pub mod layout;
pub mod logo;
pub mod promo;
pub mod results;
pub mod search_bar;
pub mod shortcuts;
pub mod status_bar;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use freshtab_core::Route;

use crate::app::App;

/// Render the entire page
pub fn render(frame: &mut Frame, app: &App) {
    let (address_area, content_area, footer_area, status_area) =
        layout::Layout::main(frame.area());

    address_bar::render(frame, address_area, app);

    match app.router.route() {
        Route::Home => home::render(frame, content_area, app),
        Route::Search { query } => results::render(frame, content_area, app, query),
    }

    footer::render(frame, footer_area);
    status_bar::render(frame, status_area, app);
}

/// Text being edited, with the char under the cursor reversed
pub(crate) fn cursor_spans(text: &str, cursor: usize) -> Vec<Span<'_>> {
    let at = text
        .char_indices()
        .nth(cursor)
        .map(|(at, _)| at)
        .unwrap_or(text.len());
    let (before, rest) = text.split_at(at);

    let mut spans = vec![Span::raw(before)];
    match rest.chars().next() {
        Some(c) => {
            spans.push(Span::styled(
                c.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(&rest[c.len_utf8()..]));
        }
        None => spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    }
    spans
}

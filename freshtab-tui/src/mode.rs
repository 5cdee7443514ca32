/// Interaction modes (vim-inspired)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Move focus around the page
    Normal,

    /// Type into the search bar
    Input,

    /// Edit the address bar
    Address,
}

impl Mode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Input => "INPUT",
            Mode::Address => "ADDRESS",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Mode::Normal => Color::Cyan,
            Mode::Input => Color::Green,
            Mode::Address => Color::Yellow,
        }
    }
}

/// Which home-view control has focus.
///
/// Tile indexes run left to right, top to bottom. The index one past the
/// shortcut catalog is the add tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Tile(usize),
    Promo,
}

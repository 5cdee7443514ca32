use freshtab_core::{FreshtabConfig, Router, Shortcut, Vertical};

use crate::mode::{Focus, Mode};
use crate::voice::VoiceEvent;

/// Columns in the shortcut grid
pub const GRID_COLS: usize = 4;

/// Main application state
pub struct App {
    /// Loaded page configuration
    pub config: FreshtabConfig,

    /// Navigation state and history
    pub router: Router,

    /// Current interaction mode
    pub mode: Mode,

    /// Focused home-view control
    pub focus: Focus,

    /// Search bar contents
    pub search_input: String,

    /// Cursor within the search bar, in chars
    pub search_cursor: usize,

    /// Address bar edit buffer
    pub address_input: String,

    /// Cursor within the address bar, in chars
    pub address_cursor: usize,

    /// Result vertical shown on the search view
    pub vertical: Vertical,

    /// Resolved transcriber command, when voice input is usable
    pub voice_command: Option<Vec<String>>,

    /// A voice capture is in flight
    pub listening: bool,

    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App
    pub fn new(config: FreshtabConfig, router: Router, voice_command: Option<Vec<String>>) -> Self {
        let search_input = router.query().to_string();
        let search_cursor = search_input.chars().count();
        Self {
            config,
            router,
            mode: Mode::Normal,
            focus: Focus::SearchBar,
            search_input,
            search_cursor,
            address_input: String::new(),
            address_cursor: 0,
            vertical: Vertical::Web,
            voice_command,
            listening: false,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn voice_available(&self) -> bool {
        self.voice_command.is_some()
    }

    /// Shortcut under a tile index, `None` for the add tile
    pub fn shortcut_at(&self, index: usize) -> Option<&Shortcut> {
        self.config.shortcuts.get(index)
    }

    /// Tiles on the grid, including the add tile
    pub fn tile_count(&self) -> usize {
        self.config.shortcuts.len() + 1
    }

    fn promo_visible(&self) -> bool {
        self.config.promo.enabled
    }

    fn last_tile(&self) -> usize {
        self.tile_count() - 1
    }

    // --- focus movement ---

    /// Advance focus in page order: search bar, tiles, promo.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar => Focus::Tile(0),
            Focus::Tile(i) if i < self.last_tile() => Focus::Tile(i + 1),
            Focus::Tile(_) if self.promo_visible() => Focus::Promo,
            Focus::Tile(_) => Focus::SearchBar,
            Focus::Promo => Focus::SearchBar,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar if self.promo_visible() => Focus::Promo,
            Focus::SearchBar => Focus::Tile(self.last_tile()),
            Focus::Tile(0) => Focus::SearchBar,
            Focus::Tile(i) => Focus::Tile(i - 1),
            Focus::Promo => Focus::Tile(self.last_tile()),
        };
    }

    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::Tile(i) if i >= GRID_COLS => Focus::Tile(i - GRID_COLS),
            Focus::Tile(_) => Focus::SearchBar,
            Focus::Promo => Focus::Tile(self.last_tile()),
            Focus::SearchBar => Focus::SearchBar,
        };
    }

    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar => Focus::Tile(0),
            Focus::Tile(i) if i + GRID_COLS < self.tile_count() => Focus::Tile(i + GRID_COLS),
            Focus::Tile(_) if self.promo_visible() => Focus::Promo,
            other => other,
        };
    }

    pub fn focus_left(&mut self) {
        if let Focus::Tile(i) = self.focus {
            if i % GRID_COLS != 0 {
                self.focus = Focus::Tile(i - 1);
            }
        }
    }

    pub fn focus_right(&mut self) {
        if let Focus::Tile(i) = self.focus {
            if i % GRID_COLS != GRID_COLS - 1 && i < self.last_tile() {
                self.focus = Focus::Tile(i + 1);
            }
        }
    }

    // --- mode switches ---

    pub fn enter_input(&mut self) {
        self.mode = Mode::Input;
        self.focus = Focus::SearchBar;
        self.search_cursor = self.search_input.chars().count();
    }

    /// Start editing the address bar, seeded with the current location.
    pub fn enter_address(&mut self) {
        self.mode = Mode::Address;
        self.address_input = self.router.location().to_string();
        self.address_cursor = self.address_input.chars().count();
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    // --- buffer editing ---

    pub fn search_insert(&mut self, c: char) {
        let at = byte_index(&self.search_input, self.search_cursor);
        self.search_input.insert(at, c);
        self.search_cursor += 1;
    }

    pub fn search_backspace(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor -= 1;
            let at = byte_index(&self.search_input, self.search_cursor);
            self.search_input.remove(at);
        }
    }

    pub fn search_move_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    pub fn search_move_right(&mut self) {
        if self.search_cursor < self.search_input.chars().count() {
            self.search_cursor += 1;
        }
    }

    pub fn search_move_home(&mut self) {
        self.search_cursor = 0;
    }

    pub fn search_move_end(&mut self) {
        self.search_cursor = self.search_input.chars().count();
    }

    pub fn address_insert(&mut self, c: char) {
        let at = byte_index(&self.address_input, self.address_cursor);
        self.address_input.insert(at, c);
        self.address_cursor += 1;
    }

    pub fn address_backspace(&mut self) {
        if self.address_cursor > 0 {
            self.address_cursor -= 1;
            let at = byte_index(&self.address_input, self.address_cursor);
            self.address_input.remove(at);
        }
    }

    pub fn address_move_left(&mut self) {
        self.address_cursor = self.address_cursor.saturating_sub(1);
    }

    pub fn address_move_right(&mut self) {
        if self.address_cursor < self.address_input.chars().count() {
            self.address_cursor += 1;
        }
    }

    // --- navigation ---

    /// Submit the search bar. Returns `false` when the query is blank.
    pub fn submit_search(&mut self) -> bool {
        if self.router.navigate_to_search(&self.search_input) {
            self.mode = Mode::Normal;
            self.clear_status();
            self.sync_after_navigation();
            true
        } else {
            self.set_status("Type something to search for");
            false
        }
    }

    /// Submit the address bar, navigating wherever it parses to.
    pub fn submit_address(&mut self) {
        let location = self.address_input.clone();
        self.router.open_location(&location);
        self.mode = Mode::Normal;
        self.clear_status();
        self.sync_after_navigation();
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.clear_status();
            self.sync_after_navigation();
        } else {
            self.set_status("Already at the oldest entry");
        }
    }

    pub fn go_forward(&mut self) {
        if self.router.forward() {
            self.clear_status();
            self.sync_after_navigation();
        } else {
            self.set_status("Already at the newest entry");
        }
    }

    pub fn go_home(&mut self) {
        self.router.navigate_to_home();
        self.clear_status();
        self.sync_after_navigation();
    }

    /// Switch the result vertical, when the engine offers it.
    pub fn set_vertical(&mut self, vertical: Vertical) {
        if !self.router.route().is_search() {
            return;
        }
        if self.config.engine.supports(vertical) {
            self.vertical = vertical;
        } else {
            self.set_status(format!(
                "{} has no {} results",
                self.config.engine.name,
                vertical.label()
            ));
        }
    }

    /// URL the current results view delegates to
    pub fn results_url(&self) -> Option<String> {
        let query = self.router.query();
        if query.is_empty() {
            return None;
        }
        self.config.engine.vertical_url(self.vertical, query)
    }

    /// Keep the search bar and view state in step with the router after any
    /// navigation.
    fn sync_after_navigation(&mut self) {
        self.search_input = self.router.query().to_string();
        self.search_cursor = self.search_input.chars().count();
        self.vertical = Vertical::Web;
        if !self.router.route().is_search() {
            self.focus = Focus::SearchBar;
        }
    }

    // --- voice ---

    pub fn begin_listening(&mut self) {
        self.listening = true;
        self.set_status("Listening, speak your search");
    }

    /// Apply the single event a voice capture produces.
    ///
    /// A transcript behaves exactly like typing the text and submitting it.
    pub fn apply_voice_event(&mut self, event: VoiceEvent) {
        self.listening = false;
        match event {
            VoiceEvent::Transcript(text) => {
                self.search_input = text;
                self.search_cursor = self.search_input.chars().count();
                if self.router.navigate_to_search(&self.search_input) {
                    self.clear_status();
                    self.sync_after_navigation();
                } else {
                    self.set_status("Voice: no speech detected");
                }
            }
            VoiceEvent::Failed(reason) => {
                self.set_status(format!("Voice: {reason}"));
            }
        }
    }
}

/// Byte offset of a char cursor, clamped to the end of the text
fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(at, _)| at)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshtab_core::Route;

    fn app() -> App {
        App::new(FreshtabConfig::default(), Router::new(), None)
    }

    #[test]
    fn test_starts_on_home_with_search_focused() {
        let app = app();
        assert_eq!(app.router.route(), &Route::Home);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.focus, Focus::SearchBar);
        assert!(!app.listening);
    }

    #[test]
    fn test_focus_cycle_covers_every_control() {
        let mut app = app();
        // 6 shortcuts + add tile + promo, then back around
        let mut seen = vec![app.focus];
        for _ in 0..8 {
            app.focus_next();
            seen.push(app.focus);
        }
        assert_eq!(seen[1], Focus::Tile(0));
        assert_eq!(seen[7], Focus::Tile(6));
        assert_eq!(seen[8], Focus::Promo);
        app.focus_next();
        assert_eq!(app.focus, Focus::SearchBar);
    }

    #[test]
    fn test_focus_cycle_skips_disabled_promo() {
        let mut app = app();
        app.config.promo.enabled = false;
        app.focus = Focus::Tile(app.last_tile());
        app.focus_next();
        assert_eq!(app.focus, Focus::SearchBar);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Tile(6));
    }

    #[test]
    fn test_grid_movement() {
        let mut app = app();
        app.focus_down();
        assert_eq!(app.focus, Focus::Tile(0));
        app.focus_right();
        assert_eq!(app.focus, Focus::Tile(1));
        app.focus_down();
        assert_eq!(app.focus, Focus::Tile(5));
        app.focus_left();
        assert_eq!(app.focus, Focus::Tile(4));
        app.focus_up();
        assert_eq!(app.focus, Focus::Tile(0));
        app.focus_up();
        assert_eq!(app.focus, Focus::SearchBar);
    }

    #[test]
    fn test_grid_edges_stay_put() {
        let mut app = app();
        app.focus = Focus::Tile(0);
        app.focus_left();
        assert_eq!(app.focus, Focus::Tile(0));
        app.focus = Focus::Tile(3);
        app.focus_right();
        assert_eq!(app.focus, Focus::Tile(3));
    }

    #[test]
    fn test_down_past_last_row_reaches_promo() {
        let mut app = app();
        app.focus = Focus::Tile(5);
        app.focus_down();
        assert_eq!(app.focus, Focus::Promo);
        app.focus_up();
        assert_eq!(app.focus, Focus::Tile(6));
    }

    #[test]
    fn test_search_editing_handles_multibyte() {
        let mut app = app();
        app.enter_input();
        for c in "héllo".chars() {
            app.search_insert(c);
        }
        assert_eq!(app.search_input, "héllo");
        app.search_move_left();
        app.search_move_left();
        app.search_backspace();
        assert_eq!(app.search_input, "hélo");
        app.search_move_home();
        app.search_insert('x');
        assert_eq!(app.search_input, "xhélo");
    }

    #[test]
    fn test_submit_search_switches_view() {
        let mut app = app();
        app.enter_input();
        for c in "cats".chars() {
            app.search_insert(c);
        }
        assert!(app.submit_search());
        assert_eq!(
            app.router.route(),
            &Route::Search {
                query: "cats".to_string()
            }
        );
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.router.location(), "/search?q=cats");
    }

    #[test]
    fn test_blank_submit_is_rejected_with_status() {
        let mut app = app();
        app.enter_input();
        app.search_insert(' ');
        assert!(!app.submit_search());
        assert_eq!(app.router.route(), &Route::Home);
        assert!(app.status_message.is_some());
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn test_address_submit_navigates() {
        let mut app = app();
        app.enter_address();
        assert_eq!(app.address_input, "/");
        app.address_input = "/search?q=rust".to_string();
        app.submit_address();
        assert_eq!(app.router.query(), "rust");
        // Search bar follows the route
        assert_eq!(app.search_input, "rust");
    }

    #[test]
    fn test_garbage_address_lands_home() {
        let mut app = app();
        app.enter_address();
        app.address_input = "complete nonsense".to_string();
        app.submit_address();
        assert_eq!(app.router.route(), &Route::Home);
    }

    #[test]
    fn test_back_and_forward_sync_the_search_bar() {
        let mut app = app();
        app.search_input = "cats".to_string();
        app.submit_search();
        app.go_back();
        assert_eq!(app.router.route(), &Route::Home);
        assert_eq!(app.search_input, "");
        assert_eq!(app.focus, Focus::SearchBar);
        app.go_forward();
        assert_eq!(app.search_input, "cats");
    }

    #[test]
    fn test_back_at_start_reports_status() {
        let mut app = app();
        app.go_back();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Already at the oldest entry")
        );
    }

    #[test]
    fn test_vertical_switch_only_on_results() {
        let mut app = app();
        app.set_vertical(Vertical::Images);
        assert_eq!(app.vertical, Vertical::Web);

        app.search_input = "cats".to_string();
        app.submit_search();
        app.set_vertical(Vertical::Images);
        assert_eq!(app.vertical, Vertical::Images);
        assert_eq!(
            app.results_url().as_deref(),
            Some("https://search.brave.com/images?q=cats")
        );
    }

    #[test]
    fn test_unsupported_vertical_reports_status() {
        let mut app = app();
        app.config.engine.news = None;
        app.search_input = "cats".to_string();
        app.submit_search();
        app.set_vertical(Vertical::News);
        assert_eq!(app.vertical, Vertical::Web);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Brave Search has no News results")
        );
    }

    #[test]
    fn test_vertical_resets_on_navigation() {
        let mut app = app();
        app.search_input = "cats".to_string();
        app.submit_search();
        app.set_vertical(Vertical::News);
        app.search_input = "dogs".to_string();
        app.submit_search();
        assert_eq!(app.vertical, Vertical::Web);
    }

    #[test]
    fn test_voice_transcript_fills_and_submits() {
        let mut app = app();
        app.listening = true;
        app.apply_voice_event(VoiceEvent::Transcript("rust tutorials".to_string()));
        assert!(!app.listening);
        assert_eq!(app.search_input, "rust tutorials");
        assert_eq!(
            app.router.route(),
            &Route::Search {
                query: "rust tutorials".to_string()
            }
        );
    }

    #[test]
    fn test_voice_failure_reports_status_and_stays_put() {
        let mut app = app();
        app.listening = true;
        app.apply_voice_event(VoiceEvent::Failed("timed out waiting for speech".to_string()));
        assert!(!app.listening);
        assert_eq!(app.router.route(), &Route::Home);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Voice: timed out waiting for speech")
        );
    }

    #[test]
    fn test_empty_transcript_does_not_navigate() {
        let mut app = app();
        app.listening = true;
        app.apply_voice_event(VoiceEvent::Transcript("   ".to_string()));
        assert_eq!(app.router.route(), &Route::Home);
        assert_eq!(app.status_message.as_deref(), Some("Voice: no speech detected"));
    }

    #[test]
    fn test_startup_from_search_location_seeds_the_bar() {
        let app = App::new(
            FreshtabConfig::default(),
            Router::from_location("/search?q=hello%20world"),
            None,
        );
        assert_eq!(app.search_input, "hello world");
        assert_eq!(app.search_cursor, 11);
    }
}

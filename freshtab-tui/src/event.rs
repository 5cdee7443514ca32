//! Event handling for the page

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use freshtab_core::{FreshtabConfig, Vertical};

use crate::app::App;
use crate::mode::{Focus, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Hand a URL to the system browser
    OpenExternal(String),
    /// Kick off a voice capture
    StartVoice,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global shortcuts work in every mode
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            KeyCode::Char('l') => {
                app.enter_address();
                return HandleResult::Continue;
            }
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Input => handle_input_mode(app, key),
        Mode::Address => handle_address_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    let on_results = app.router.route().is_search();

    match key.code {
        // Quit
        KeyCode::Char('q') => HandleResult::Quit,

        // Search input
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.enter_input();
            HandleResult::Continue
        }
        KeyCode::Char('e') if on_results => {
            app.enter_input();
            HandleResult::Continue
        }

        // History
        KeyCode::Backspace | KeyCode::Char('[') => {
            app.go_back();
            HandleResult::Continue
        }
        KeyCode::Char(']') => {
            app.go_forward();
            HandleResult::Continue
        }
        KeyCode::Char('H') => {
            app.go_home();
            HandleResult::Continue
        }

        // Voice capture
        KeyCode::Char('v') => {
            if app.listening {
                HandleResult::Continue
            } else if app.voice_available() {
                HandleResult::StartVoice
            } else {
                app.set_status("Voice input is not available on this system");
                HandleResult::Continue
            }
        }

        // Result verticals
        KeyCode::Char('1') if on_results => {
            app.set_vertical(Vertical::Web);
            HandleResult::Continue
        }
        KeyCode::Char('2') if on_results => {
            app.set_vertical(Vertical::Images);
            HandleResult::Continue
        }
        KeyCode::Char('3') if on_results => {
            app.set_vertical(Vertical::News);
            HandleResult::Continue
        }

        // Open the delegated results externally
        KeyCode::Char('o') | KeyCode::Enter if on_results => match app.results_url() {
            Some(url) => HandleResult::OpenExternal(url),
            None => HandleResult::Continue,
        },

        // Home-view focus movement
        KeyCode::Tab => {
            app.focus_next();
            HandleResult::Continue
        }
        KeyCode::BackTab => {
            app.focus_prev();
            HandleResult::Continue
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus_down();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_up();
            HandleResult::Continue
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focus_left();
            HandleResult::Continue
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focus_right();
            HandleResult::Continue
        }

        // Activate whatever has focus
        KeyCode::Enter => activate_focus(app),

        _ => HandleResult::Continue,
    }
}

/// Activate the focused home-view control
fn activate_focus(app: &mut App) -> HandleResult {
    match app.focus {
        Focus::SearchBar => {
            app.enter_input();
            HandleResult::Continue
        }
        Focus::Tile(index) => match app.shortcut_at(index).cloned() {
            Some(shortcut) => {
                app.set_status(format!("Opening {}", shortcut.label));
                HandleResult::OpenExternal(shortcut.url)
            }
            None => {
                // The add tile points at the config file for now
                app.set_status(format!(
                    "Add sites in {}",
                    FreshtabConfig::config_path().display()
                ));
                HandleResult::Continue
            }
        },
        Focus::Promo => HandleResult::OpenExternal(app.config.promo.url.clone()),
    }
}

/// Handle keys in search input mode
fn handle_input_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.exit_mode();
            HandleResult::Continue
        }
        KeyCode::Enter => {
            app.submit_search();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.search_backspace();
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.search_move_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.search_move_right();
            HandleResult::Continue
        }
        KeyCode::Home => {
            app.search_move_home();
            HandleResult::Continue
        }
        KeyCode::End => {
            app.search_move_end();
            HandleResult::Continue
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_insert(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Handle keys in address edit mode
fn handle_address_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.exit_mode();
            HandleResult::Continue
        }
        KeyCode::Enter => {
            app.submit_address();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.address_backspace();
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.address_move_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.address_move_right();
            HandleResult::Continue
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.address_insert(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

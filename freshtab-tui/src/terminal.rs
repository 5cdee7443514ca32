//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use freshtab_core::{FreshtabConfig, Router};

use crate::app::App;
use crate::event::{handle_key, poll_event, HandleResult};
use crate::external;
use crate::ui;
use crate::voice::{self, VoiceEvent};

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the page until the user quits.
pub async fn run(config: FreshtabConfig, initial_location: Option<String>) -> Result<()> {
    let voice_command = voice::detect(&config.voice);
    let router = match initial_location {
        Some(location) => Router::from_location(&location),
        None => Router::new(),
    };
    let mut app = App::new(config, router, voice_command);

    let (voice_tx, mut voice_rx) = mpsc::unbounded_channel();

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, voice_tx, &mut voice_rx).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    voice_tx: mpsc::UnboundedSender<VoiceEvent>,
    voice_rx: &mut mpsc::UnboundedReceiver<VoiceEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Voice events arrive from capture tasks between key events
        while let Ok(event) = voice_rx.try_recv() {
            app.apply_voice_event(event);
        }

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::OpenExternal(url) => open_external(app, &url),
                    HandleResult::StartVoice => start_voice(app, &voice_tx),
                },
                Event::Resize(_, _) => {
                    // Terminal resized, redrawn on the next pass
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Hand a URL to the system browser, reporting the outcome in the status
/// bar.
fn open_external(app: &mut App, url: &str) {
    match external::open_url(url) {
        Ok(()) => app.set_status(format!("Opened {url}")),
        Err(err) => {
            tracing::warn!(url, %err, "external open failed");
            app.set_status(format!("Open failed: {err}"));
        }
    }
}

/// Kick off a voice capture task
fn start_voice(app: &mut App, voice_tx: &mpsc::UnboundedSender<VoiceEvent>) {
    let Some(argv) = app.voice_command.clone() else {
        return;
    };
    app.begin_listening();
    voice::capture(
        argv,
        Duration::from_secs(app.config.voice.timeout_secs),
        voice_tx.clone(),
    );
}

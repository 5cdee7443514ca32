//! Voice input via an external transcriber.
//!
//! Detection runs once at startup: an explicit configured command wins,
//! otherwise known transcribers are probed on PATH. No transcriber means
//! the voice control is simply disabled, the page works the same without
//! it.
//!
//! A capture is fire and forget: one task, one transcript line off the
//! transcriber's stdout, exactly one event back to the app. Nothing awaits
//! it and quitting mid-capture just drops the channel.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStdout, Command};
use tokio::sync::mpsc;

use freshtab_core::VoiceConfig;

/// Transcribers probed on PATH, in preference order
const TRANSCRIBER_CANDIDATES: &[&str] = &["hear", "vosk-transcriber", "whisper-stream"];

/// Outcome of a voice capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// One recognized utterance
    Transcript(String),
    /// Capture produced nothing usable
    Failed(String),
}

/// Resolve the transcriber command line, `None` when voice input cannot
/// work here.
pub fn detect(config: &VoiceConfig) -> Option<Vec<String>> {
    if !config.enabled {
        return None;
    }

    if let Some(command) = &config.command {
        let argv = shlex::split(command)?;
        let program = argv.first()?;
        if which::which(program).is_err() {
            tracing::warn!(command = %command, "configured transcriber not found");
            return None;
        }
        return Some(argv);
    }

    for candidate in TRANSCRIBER_CANDIDATES {
        if which::which(candidate).is_ok() {
            tracing::debug!(transcriber = candidate, "voice input available");
            return Some(vec![candidate.to_string()]);
        }
    }

    None
}

/// Spawn a capture task reporting exactly one event on `events`.
pub fn capture(argv: Vec<String>, timeout: Duration, events: mpsc::UnboundedSender<VoiceEvent>) {
    tokio::spawn(async move {
        let event = run_transcriber(&argv, timeout).await;
        // Receiver is gone when the app quit mid-capture
        let _ = events.send(event);
    });
}

async fn run_transcriber(argv: &[String], timeout: Duration) -> VoiceEvent {
    let Some((program, args)) = argv.split_first() else {
        return VoiceEvent::Failed("transcriber command is empty".to_string());
    };

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => return VoiceEvent::Failed(format!("could not start {program}: {err}")),
    };

    let Some(stdout) = child.stdout.take() else {
        let _ = child.kill().await;
        return VoiceEvent::Failed("transcriber stdout unavailable".to_string());
    };

    let result = tokio::time::timeout(timeout, first_transcript_line(stdout)).await;

    // The transcriber may keep streaming; one utterance is all we take
    let _ = child.kill().await;

    match result {
        Ok(Some(line)) => VoiceEvent::Transcript(line),
        Ok(None) => VoiceEvent::Failed("no speech detected".to_string()),
        Err(_) => VoiceEvent::Failed("timed out waiting for speech".to_string()),
    }
}

/// First non-empty stdout line, trimmed
async fn first_transcript_line(stdout: ChildStdout) -> Option<String> {
    let mut lines = BufReader::new(stdout).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if !line.is_empty() {
            return Some(line.to_string());
        }
    }
    None
}

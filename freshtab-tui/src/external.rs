//! Opening URLs in the system browser.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;

/// Pick the launcher command line: `$BROWSER` wins, then the usual
/// platform openers on PATH.
fn launcher(browser_env: Option<&str>) -> Option<Vec<String>> {
    if let Some(browser) = browser_env {
        if !browser.trim().is_empty() {
            if let Some(argv) = shlex::split(browser) {
                if !argv.is_empty() {
                    return Some(argv);
                }
            }
        }
    }

    for candidate in ["xdg-open", "open"] {
        if which::which(candidate).is_ok() {
            return Some(vec![candidate.to_string()]);
        }
    }

    None
}

/// Launch the system browser on `url`, detached.
///
/// The spawned process is never awaited or tracked; the page only cares
/// that the handoff happened.
pub fn open_url(url: &str) -> Result<()> {
    let browser_env = std::env::var("BROWSER").ok();
    let argv =
        launcher(browser_env.as_deref()).context("no browser launcher found (set $BROWSER)")?;

    tracing::info!(url, launcher = %argv[0], "opening external url");

    let mut command = Command::new(&argv[0]);
    command
        .args(&argv[1..])
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command
        .spawn()
        .with_context(|| format!("failed to launch {}", argv[0]))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_env_wins_and_splits() {
        let argv = launcher(Some("firefox --new-window")).expect("launcher");
        assert_eq!(argv, vec!["firefox".to_string(), "--new-window".to_string()]);
    }

    #[test]
    fn test_blank_browser_env_is_ignored() {
        // Falls through to the PATH probe, which may or may not find an
        // opener; it must not come back as an empty command
        if let Some(argv) = launcher(Some("   ")) {
            assert!(!argv.is_empty());
            assert_ne!(argv[0].trim(), "");
        }
    }
}

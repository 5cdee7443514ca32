//! Page configuration, loaded from `~/.freshtab/config.toml`.
//!
//! Every section is optional. A missing file, a missing section, or a
//! missing field inside a section all fall back to the stock page, so a
//! fresh install runs with no setup at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::SearchEngine;
use crate::error::{Error, Result};
use crate::sites::{default_shortcuts, Shortcut};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshtabConfig {
    pub engine: SearchEngine,
    pub shortcuts: Vec<Shortcut>,
    pub promo: PromoConfig,
    pub voice: VoiceConfig,
}

impl Default for FreshtabConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngine::brave(),
            shortcuts: default_shortcuts(),
            promo: PromoConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

/// The promotional card on the home view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoConfig {
    pub enabled: bool,
    pub title: String,
    pub body: String,
    pub button: String,
    pub url: String,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Brave Browser".to_string(),
            body: "Enjoying private search? Try the browser that puts you first.".to_string(),
            button: "Download".to_string(),
            url: "https://brave.com".to_string(),
        }
    }
}

/// Voice input settings.
///
/// `command` overrides transcriber auto-detection; it is split shell-style
/// before spawning. `enabled = false` skips the probe entirely and the
/// control stays off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub enabled: bool,
    pub command: Option<String>,
    pub timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            timeout_secs: 15,
        }
    }
}

impl FreshtabConfig {
    /// Load config from `path`, or from [`Self::config_path`] when `None`.
    ///
    /// A file that does not exist yields the defaults; a file that exists
    /// but cannot be read or parsed is an error, so typos do not silently
    /// reset the page.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|source| Error::ConfigParse { path, source })?;

        tracing::debug!(shortcuts = config.shortcuts.len(), engine = %config.engine.name, "config loaded");
        Ok(config)
    }

    /// Config file path: `~/.freshtab/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".freshtab/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = FreshtabConfig::load(Some(&dir.path().join("nope.toml"))).expect("defaults");
        assert_eq!(config, FreshtabConfig::default());
        assert_eq!(config.engine.name, "Brave Search");
        assert_eq!(config.shortcuts.len(), 6);
        assert!(config.promo.enabled);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"
[engine]
name = "DuckDuckGo"
web = "https://duckduckgo.com/"

[[shortcuts]]
label = "Lobsters"
url = "https://lobste.rs"

[promo]
enabled = false

[voice]
command = "my-transcriber --stdout"
timeout_secs = 5
"#
        )
        .expect("write config");

        let config = FreshtabConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.engine.name, "DuckDuckGo");
        assert_eq!(config.shortcuts.len(), 1);
        assert_eq!(config.shortcuts[0].label, "Lobsters");
        assert!(!config.promo.enabled);
        // Unset promo fields keep their stock values
        assert_eq!(config.promo.title, "Brave Browser");
        assert_eq!(config.voice.command.as_deref(), Some("my-transcriber --stdout"));
        assert_eq!(config.voice.timeout_secs, 5);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "[promo]\nenabled = false\n").expect("write config");

        let config = FreshtabConfig::load(Some(file.path())).expect("load");
        assert!(!config.promo.enabled);
        assert_eq!(config.shortcuts.len(), 6);
        assert_eq!(config.engine, SearchEngine::brave());
        assert!(config.voice.enabled);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "[[[ not toml").expect("write config");

        let err = FreshtabConfig::load(Some(file.path())).expect_err("parse failure");
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory exists but cannot be read as a file
        let err = FreshtabConfig::load(Some(dir.path())).expect_err("read failure");
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}

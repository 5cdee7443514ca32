//! Shortcut tiles for the home view.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One pinned site on the home grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub label: String,
    pub url: String,
}

impl Shortcut {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Hostname for display under the tile: scheme and `www.` stripped,
    /// path dropped.
    pub fn host(&self) -> &str {
        let rest = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(&self.url);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        match rest.split_once('/') {
            Some((host, _)) => host,
            None => rest,
        }
    }

    /// Single character drawn in the tile avatar
    pub fn tile_glyph(&self) -> char {
        self.label
            .chars()
            .find(|c| c.is_alphanumeric())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }
}

/// Stock shortcuts shown until the user configures their own
pub static DEFAULT_SHORTCUTS: Lazy<Vec<Shortcut>> = Lazy::new(|| {
    vec![
        Shortcut::new("GitHub", "https://github.com"),
        Shortcut::new("YouTube", "https://youtube.com"),
        Shortcut::new("Reddit", "https://reddit.com"),
        Shortcut::new("X", "https://x.com"),
        Shortcut::new("Vercel", "https://vercel.com"),
        Shortcut::new("Stack Overflow", "https://stackoverflow.com"),
    ]
});

pub fn default_shortcuts() -> Vec<Shortcut> {
    DEFAULT_SHORTCUTS.clone()
}

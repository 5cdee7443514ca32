//! Search engine endpoints.
//!
//! Result pages are never rendered locally. The results view shows which
//! engine URL the query was delegated to, and opening it externally is the
//! actual "view results" action.

use serde::{Deserialize, Serialize};

/// A result vertical offered by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Web,
    Images,
    News,
}

impl Vertical {
    pub const ALL: [Vertical; 3] = [Vertical::Web, Vertical::Images, Vertical::News];

    pub fn label(&self) -> &'static str {
        match self {
            Vertical::Web => "Web",
            Vertical::Images => "Images",
            Vertical::News => "News",
        }
    }
}

/// The engine queries are delegated to.
///
/// `web` is mandatory; verticals without an endpoint are simply not offered
/// in the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEngine {
    pub name: String,
    pub web: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<String>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::brave()
    }
}

impl SearchEngine {
    /// The stock engine
    pub fn brave() -> Self {
        Self {
            name: "Brave Search".to_string(),
            web: "https://search.brave.com/search".to_string(),
            images: Some("https://search.brave.com/images".to_string()),
            news: Some("https://search.brave.com/news".to_string()),
        }
    }

    /// Full web results URL for a query
    pub fn results_url(&self, query: &str) -> String {
        with_query(&self.web, query)
    }

    /// Results URL for a vertical, `None` when the engine has no endpoint
    /// for it.
    pub fn vertical_url(&self, vertical: Vertical, query: &str) -> Option<String> {
        let base = match vertical {
            Vertical::Web => Some(self.web.as_str()),
            Vertical::Images => self.images.as_deref(),
            Vertical::News => self.news.as_deref(),
        };
        base.map(|base| with_query(base, query))
    }

    pub fn supports(&self, vertical: Vertical) -> bool {
        match vertical {
            Vertical::Web => true,
            Vertical::Images => self.images.is_some(),
            Vertical::News => self.news.is_some(),
        }
    }
}

/// Append `q=<encoded>` to an endpoint, tolerating bases that already carry
/// a query string.
fn with_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", base, separator, urlencoding::encode(query))
}

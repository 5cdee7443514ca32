//! Locations and routes.
//!
//! A *location* is the address-line string (`/` or `/search?q=<encoded>`),
//! a [`Route`] is its parsed form. Parsing is total: anything that is not a
//! recognized search location with a non-empty query resolves to home, and
//! structurally broken input falls back to home instead of propagating.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// The home location
pub const HOME_LOCATION: &str = "/";

/// Path component of the results location
pub const SEARCH_PATH: &str = "/search";

/// A parsed route within the page.
///
/// The page has exactly two views. `Search` always carries a non-empty,
/// trimmed query; the "results view with nothing to show" state cannot be
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The start page: logo, search bar, shortcuts, promo card
    Home,
    /// The results view for a query
    Search { query: String },
}

impl Route {
    /// Build a search route from raw input.
    ///
    /// Returns `None` when the trimmed query is empty, which is how
    /// "submitting a blank search does nothing" is enforced everywhere.
    pub fn search(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Route::Search {
                query: trimmed.to_string(),
            })
        }
    }

    /// Parse a location string, falling back to home on malformed input.
    pub fn parse(location: &str) -> Self {
        match Self::try_parse(location) {
            Ok(route) => route,
            Err(err) => {
                tracing::debug!(location, %err, "unparseable location, falling back to home");
                Route::Home
            }
        }
    }

    /// Parse a location string.
    ///
    /// Errors only on structural problems: a location that is not an
    /// absolute path, or a `q` value with undecodable percent data. A
    /// well-formed location that is not a search with a non-empty query
    /// (unknown path, missing or blank `q`) parses to `Home`.
    pub fn try_parse(location: &str) -> Result<Self> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(Error::location_syntax(location, "empty location"));
        }
        if !trimmed.starts_with('/') {
            return Err(Error::location_syntax(location, "missing leading '/'"));
        }

        // Fragments never influence routing
        let without_fragment = match trimmed.split_once('#') {
            Some((head, _)) => head,
            None => trimmed,
        };

        let (path, query_string) = match without_fragment.split_once('?') {
            Some((path, qs)) => (path, Some(qs)),
            None => (without_fragment, None),
        };

        if path != SEARCH_PATH {
            // `/` and anything unrecognized both land on home
            return Ok(Route::Home);
        }

        let Some(query_string) = query_string else {
            return Ok(Route::Home);
        };

        for pair in query_string.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key != "q" {
                continue;
            }
            let decoded = decode_query_value(location, value)?;
            return Ok(Route::search(&decoded).unwrap_or(Route::Home));
        }

        Ok(Route::Home)
    }

    /// Canonical location string for this route
    pub fn location(&self) -> String {
        match self {
            Route::Home => HOME_LOCATION.to_string(),
            Route::Search { query } => {
                format!("{}?q={}", SEARCH_PATH, urlencoding::encode(query))
            }
        }
    }

    /// The query this route carries (empty for home)
    pub fn query(&self) -> &str {
        match self {
            Route::Home => "",
            Route::Search { query } => query,
        }
    }

    /// True when this is the results view
    pub fn is_search(&self) -> bool {
        matches!(self, Route::Search { .. })
    }
}

/// Decode a single query-string value.
///
/// `+` means space in query strings, and the replacement has to happen
/// before percent decoding so an encoded `%2B` still comes out as a
/// literal plus.
fn decode_query_value(location: &str, raw: &str) -> Result<String> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(source) => Err(Error::query_encoding(location, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Route::Home);
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            Route::parse("/search?q=cats"),
            Route::Search {
                query: "cats".to_string()
            }
        );
    }

    #[test]
    fn test_parse_percent_encoded_query() {
        assert_eq!(
            Route::parse("/search?q=hello%20world"),
            Route::Search {
                query: "hello world".to_string()
            }
        );
    }

    #[test]
    fn test_parse_plus_as_space() {
        assert_eq!(
            Route::parse("/search?q=hello+world"),
            Route::Search {
                query: "hello world".to_string()
            }
        );
        // %2B survives the plus handling as a literal plus
        assert_eq!(
            Route::parse("/search?q=%2B1"),
            Route::Search {
                query: "+1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_ignores_other_params() {
        assert_eq!(
            Route::parse("/search?lang=en&q=rust"),
            Route::Search {
                query: "rust".to_string()
            }
        );
    }

    #[test]
    fn test_parse_first_q_wins() {
        assert_eq!(
            Route::parse("/search?q=first&q=second"),
            Route::Search {
                query: "first".to_string()
            }
        );
    }

    #[test]
    fn test_parse_fragment_stripped() {
        assert_eq!(
            Route::parse("/search?q=cats#results"),
            Route::Search {
                query: "cats".to_string()
            }
        );
        assert_eq!(Route::parse("/#top"), Route::Home);
    }

    #[test]
    fn test_missing_or_blank_query_is_home() {
        assert_eq!(Route::parse("/search"), Route::Home);
        assert_eq!(Route::parse("/search?q="), Route::Home);
        assert_eq!(Route::parse("/search?q"), Route::Home);
        assert_eq!(Route::parse("/search?q=%20%20"), Route::Home);
        assert_eq!(Route::parse("/search?page=2"), Route::Home);
    }

    #[test]
    fn test_unknown_path_is_home() {
        assert_eq!(Route::parse("/foo"), Route::Home);
        // Strict path match: the trailing slash form is not the search path
        assert_eq!(Route::parse("/search/?q=cats"), Route::Home);
    }

    #[test]
    fn test_malformed_location_falls_back_to_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("   "), Route::Home);
        assert_eq!(Route::parse("search?q=cats"), Route::Home);
        assert_eq!(Route::parse("not a location at all"), Route::Home);
        // Invalid UTF-8 behind the percent encoding
        assert_eq!(Route::parse("/search?q=%FF"), Route::Home);
    }

    #[test]
    fn test_try_parse_reports_structural_errors() {
        assert!(matches!(
            Route::try_parse("search?q=cats"),
            Err(Error::LocationSyntax { .. })
        ));
        assert!(matches!(
            Route::try_parse("/search?q=%FF"),
            Err(Error::QueryEncoding { .. })
        ));
        // Unknown paths are not errors, just home
        assert_eq!(Route::try_parse("/foo").unwrap(), Route::Home);
    }

    #[test]
    fn test_location_formatting() {
        assert_eq!(Route::Home.location(), "/");
        let route = Route::search("hello world").unwrap();
        assert_eq!(route.location(), "/search?q=hello%20world");
    }

    #[test]
    fn test_location_round_trip() {
        let queries = ["cats", "hello world", "héllo wörld", "cats & dogs?", "a+b"];
        for q in queries {
            let route = Route::search(q).unwrap();
            assert_eq!(Route::parse(&route.location()), route, "query: {q}");
        }
        assert_eq!(Route::parse(&Route::Home.location()), Route::Home);
    }

    #[test]
    fn test_search_constructor_trims() {
        assert_eq!(Route::search(""), None);
        assert_eq!(Route::search("   "), None);
        assert_eq!(
            Route::search("  cats  "),
            Some(Route::Search {
                query: "cats".to_string()
            })
        );
    }

    #[test]
    fn test_query_projection() {
        assert_eq!(Route::Home.query(), "");
        assert_eq!(Route::search("cats").unwrap().query(), "cats");
    }
}

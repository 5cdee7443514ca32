//! Two-view router with address-bar history.
//!
//! The router owns the history list the way a browser session does: a list
//! of canonical locations plus a cursor. Navigation pushes entries and drops
//! anything forward of the cursor; back/forward move the cursor and
//! re-derive the route by parsing the entry under it.

use crate::location::{Route, HOME_LOCATION};

/// Navigation state for the page.
///
/// Invariants: `entries` is never empty, `index` is always in bounds, and
/// `route` is always the parsed form of `entries[index]`. Entries hold
/// canonical locations produced by [`Route::location`], so re-deriving on
/// back/forward is lossless.
#[derive(Debug, Clone)]
pub struct Router {
    entries: Vec<String>,
    index: usize,
    route: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start a session on the home view
    pub fn new() -> Self {
        Self::from_location(HOME_LOCATION)
    }

    /// Start a session from an existing location, as on reload.
    ///
    /// Malformed locations fall back to home rather than failing startup.
    pub fn from_location(location: &str) -> Self {
        let route = Route::parse(location);
        let entries = vec![route.location()];
        Self {
            entries,
            index: 0,
            route,
        }
    }

    /// The current route
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The current canonical location, as shown in the address bar
    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    /// The current query (empty on home)
    pub fn query(&self) -> &str {
        self.route.query()
    }

    /// All history entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Cursor position within [`Self::entries`]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Navigate to the results view for `query`.
    ///
    /// Returns `false` without touching history when the trimmed query is
    /// empty.
    pub fn navigate_to_search(&mut self, query: &str) -> bool {
        match Route::search(query) {
            Some(route) => {
                self.push(route);
                true
            }
            None => false,
        }
    }

    /// Navigate to the home view, pushing a history entry.
    pub fn navigate_to_home(&mut self) {
        self.push(Route::Home);
    }

    /// Navigate to a location typed into the address bar.
    ///
    /// The location is parsed totally, so garbage input lands on home
    /// instead of erroring.
    pub fn open_location(&mut self, location: &str) {
        self.push(Route::parse(location));
    }

    /// Move one entry back in history. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        self.rederive();
        true
    }

    /// Move one entry forward in history. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        self.rederive();
        true
    }

    fn push(&mut self, route: Route) {
        self.entries.truncate(self.index + 1);
        self.entries.push(route.location());
        self.index = self.entries.len() - 1;
        self.route = route;
        tracing::debug!(location = %self.entries[self.index], "navigation push");
    }

    fn rederive(&mut self) {
        self.route = Route::parse(&self.entries[self.index]);
        tracing::debug!(location = %self.entries[self.index], "history traversal");
    }
}

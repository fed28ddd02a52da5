//! Filter selection and location routing
//!
//! The visible list is controlled by an addressable location. Each filter
//! has exactly one location, and the router keeps an explicit history stack
//! so back/forward navigation can be replayed without a browser.

use crate::error::TodoError;
use crate::todo::Item;
use std::fmt;
use std::str::FromStr;

/// Which items the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Every filter, in the order the filter controls are shown
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Lowercase name used by the tool surface
    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Label of the filter control
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether `item` is shown under this filter
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => item.is_active(),
            Filter::Completed => item.is_completed(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name() == name)
            .ok_or_else(|| TodoError::InvalidFilter(s.to_string()))
    }
}

/// Map a location string to a filter
///
/// An optional leading `#` and surrounding `/` are ignored. Anything that is
/// not exactly `active` or `completed` afterwards, including the empty
/// location, selects [`Filter::All`].
pub fn parse(location: &str) -> Filter {
    let path = location.strip_prefix('#').unwrap_or(location);
    match path.trim_matches('/') {
        "active" => Filter::Active,
        "completed" => Filter::Completed,
        _ => Filter::All,
    }
}

/// The one location for `filter`
pub fn location_for(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "#/",
        Filter::Active => "#/active",
        Filter::Completed => "#/completed",
    }
}

/// Navigation history over filter locations
///
/// Owns nothing besides the history entries and the filter parsed from the
/// entry under the cursor.
#[derive(Debug, Clone)]
pub struct FilterRouter {
    entries: Vec<&'static str>,
    cursor: usize,
    current: Filter,
}

impl Default for FilterRouter {
    fn default() -> Self {
        Self::from_location("")
    }
}

impl FilterRouter {
    /// Router positioned at the default location (All)
    pub fn new() -> Self {
        Self::default()
    }

    /// Router whose first history entry is `location`
    pub fn from_location(location: &str) -> Self {
        let current = parse(location);
        Self {
            entries: vec![location_for(current)],
            cursor: 0,
            current,
        }
    }

    /// Currently selected filter
    pub fn current(&self) -> Filter {
        self.current
    }

    /// Location of the history entry under the cursor
    pub fn location(&self) -> &'static str {
        self.entries[self.cursor]
    }

    /// Every history entry, oldest first
    pub fn history(&self) -> &[&'static str] {
        &self.entries
    }

    /// Select `filter`
    ///
    /// Pushes one history entry when the filter differs from the current
    /// one and drops any forward entries. Reselecting the current filter
    /// changes nothing.
    ///
    /// # Returns
    /// Whether a history entry was pushed
    pub fn navigate(&mut self, filter: Filter) -> bool {
        if filter == self.current {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location_for(filter));
        self.cursor += 1;
        self.current = filter;
        true
    }

    /// Select the filter a typed location resolves to
    pub fn navigate_to(&mut self, location: &str) -> bool {
        self.navigate(parse(location))
    }

    /// Step back to the previous history entry
    ///
    /// # Returns
    /// The filter now selected, or `None` at the start of history
    pub fn go_back(&mut self) -> Option<Filter> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.current = parse(self.entries[self.cursor]);
        Some(self.current)
    }

    /// Step forward to the next history entry
    ///
    /// # Returns
    /// The filter now selected, or `None` at the end of history
    pub fn go_forward(&mut self) -> Option<Filter> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current = parse(self.entries[self.cursor]);
        Some(self.current)
    }
}

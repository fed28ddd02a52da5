use crate::error::TodoError;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a to-do item
///
/// Assigned by the store when the item is created and never reused while that
/// store lives. Displayed as `#N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw id value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = TodoError;

    /// Accepts `#3`, `3`, and either form surrounded by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| TodoError::InvalidItemId(s.to_string()))
    }
}

/// A single to-do item
///
/// `title` is always trimmed and non-empty: every path that stores a title
/// goes through [`crate::validation::normalize_title`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier assigned at creation
    pub(crate) id: ItemId,
    /// Normalized title text
    pub(crate) title: String,
    /// Whether the item has been completed
    pub(crate) completed: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// The item's identifier
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The item's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is completed
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the item still needs doing
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

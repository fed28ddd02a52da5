//! Error types for the to-do engine

use crate::todo::ItemId;
use thiserror::Error;

/// Errors returned by item-state operations.
///
/// Blank titles are not errors: an empty add is a no-op and an empty edit
/// removes the item. These variants cover genuine failures only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    /// A mutation referenced an id that is not in the store.
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// The durable store could not be written.
    ///
    /// The in-memory mutation has already been applied when this is returned.
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// An item id string could not be parsed.
    #[error("Invalid item id '{0}'. Use the form #1 or 1")]
    InvalidItemId(String),

    /// A filter name could not be parsed.
    #[error("Invalid filter '{0}'. Valid filters: all, active, completed")]
    InvalidFilter(String),
}

/// Result alias for item-state operations
pub type TodoResult<T> = Result<T, TodoError>;

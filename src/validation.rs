//! Validation helper functions for the to-do engine
//!
//! This module contains title normalization, shared by add and edit, and the
//! parsing of item ids and filter names coming in from the tool surface.

use crate::error::TodoResult;
use crate::router::Filter;
use crate::todo::ItemId;

/// Normalize a raw title for storage
///
/// Strips leading and trailing whitespace and keeps internal whitespace
/// verbatim. Add and edit both go through this function.
///
/// # Arguments
/// * `raw` - Title text as entered
///
/// # Returns
/// The trimmed title, or `None` when nothing remains after trimming
///
/// # Examples
/// ```
/// # use todo_mcp::validation::normalize_title;
/// assert_eq!(normalize_title("  feed the cat  "), Some("feed the cat".to_string()));
/// assert_eq!(normalize_title("   "), None);
/// ```
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse and validate an item id parameter
///
/// # Arguments
/// * `id_str` - Id string, e.g. "#3" or "3"
pub fn parse_item_id(id_str: &str) -> TodoResult<ItemId> {
    id_str.parse()
}

/// Parse and validate a filter name parameter
///
/// # Arguments
/// * `filter_str` - One of "all", "active", "completed"
pub fn parse_filter_name(filter_str: &str) -> TodoResult<Filter> {
    filter_str.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;

    #[test]
    fn test_normalize_title_trims() {
        assert_eq!(
            normalize_title("    buy some sausages    "),
            Some("buy some sausages".to_string())
        );
        assert_eq!(normalize_title("\tx\n"), Some("x".to_string()));
    }

    #[test]
    fn test_normalize_title_keeps_internal_whitespace() {
        assert_eq!(
            normalize_title(" buy   some\tcheese "),
            Some("buy   some\tcheese".to_string())
        );
    }

    #[test]
    fn test_normalize_title_blank() {
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title("\n\t "), None);
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("#2"), Ok(ItemId::new(2)));
        assert_eq!(parse_item_id("2"), Ok(ItemId::new(2)));
        assert_eq!(
            parse_item_id("two"),
            Err(TodoError::InvalidItemId("two".to_string()))
        );
    }

    #[test]
    fn test_parse_filter_name() {
        assert_eq!(parse_filter_name("all"), Ok(Filter::All));
        assert_eq!(parse_filter_name("active"), Ok(Filter::Active));
        assert_eq!(parse_filter_name("completed"), Ok(Filter::Completed));
        assert_eq!(
            parse_filter_name("done"),
            Err(TodoError::InvalidFilter("done".to_string()))
        );
    }
}

//! MCP tool handlers for the to-do server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod clear_completed;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod toggle;
pub mod view;

use crate::error::TodoError;

/// Convert an engine error into a public MCP error
pub(crate) fn to_mcp_error(error: TodoError) -> mcp_attr::Error {
    let code = match error {
        TodoError::PersistenceUnavailable(_) => mcp_attr::ErrorCode::INTERNAL_ERROR,
        TodoError::NotFound(_) | TodoError::InvalidItemId(_) | TodoError::InvalidFilter(_) => {
            mcp_attr::ErrorCode::INVALID_PARAMS
        }
    };
    let message = match error {
        TodoError::NotFound(id) => format!(
            "Item not found: Item '{}' does not exist. Use view() to see available items.",
            id
        ),
        TodoError::PersistenceUnavailable(reason) => format!(
            "Failed to save: {}. The change is kept in memory.",
            reason
        ),
        other => other.to_string(),
    };
    mcp_attr::Error::new(code).with_message(message, true)
}

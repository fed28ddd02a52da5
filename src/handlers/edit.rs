//! Edit handler for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use crate::todo::EditOutcome;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Replaces an item's title, or deletes the item when the new title is blank.
    pub async fn handle_edit(&self, id: String, title: String) -> McpResult<String> {
        let id = validation::parse_item_id(&id).map_err(to_mcp_error)?;
        let mut app = self.lock_app()?;

        match app.edit(id, &title).map_err(to_mcp_error)? {
            EditOutcome::Renamed => {
                let stored = app.get(id).map(|item| item.title().to_string());
                Ok(format!("Item {} updated: {}", id, stored.unwrap_or_default()))
            }
            EditOutcome::Removed(item) => Ok(format!(
                "Item {} deleted (blank title): {}",
                id,
                item.title()
            )),
        }
    }
}

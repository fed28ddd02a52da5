//! Toggle handlers for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Flips one item's completed flag.
    pub async fn handle_toggle(&self, id: String) -> McpResult<String> {
        let id = validation::parse_item_id(&id).map_err(to_mcp_error)?;
        let mut app = self.lock_app()?;

        let completed = app.toggle(id).map_err(to_mcp_error)?;
        Ok(format!(
            "Item {} marked {} ({})",
            id,
            if completed { "completed" } else { "active" },
            app.view().remaining_label
        ))
    }

    /// Sets every item's completed flag.
    pub async fn handle_toggle_all(&self, completed: bool) -> McpResult<String> {
        let mut app = self.lock_app()?;

        let changed = app.toggle_all(completed).map_err(to_mcp_error)?;
        Ok(format!(
            "Marked {} item(s) {} ({})",
            changed,
            if completed { "completed" } else { "active" },
            app.view().remaining_label
        ))
    }
}

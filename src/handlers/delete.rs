//! Delete handler for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Removes one item.
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let id = validation::parse_item_id(&id).map_err(to_mcp_error)?;
        let mut app = self.lock_app()?;

        let item = app.remove(id).map_err(to_mcp_error)?;
        Ok(format!("Item {} deleted: {}", id, item.title()))
    }
}

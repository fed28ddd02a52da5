//! Add handler for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Appends a new item; a blank title is reported but is not an error.
    pub async fn handle_add(&self, title: String) -> McpResult<String> {
        let mut app = self.lock_app()?;

        match app.add(&title).map_err(to_mcp_error)? {
            Some(id) => {
                let stored = app.get(id).map(|item| item.title().to_string());
                Ok(format!("Item created with ID: {} ({})", id, stored.unwrap_or_default()))
            }
            None => Ok("Nothing added: title is blank".to_string()),
        }
    }
}

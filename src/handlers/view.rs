//! View handler for the to-do server

use crate::TodoServerHandler;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Renders the current projection.
    pub async fn handle_view(&self) -> McpResult<String> {
        let app = self.lock_app()?;
        Ok(app.view().render())
    }
}

//! Clear completed handler for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Removes all completed items. The control is hidden when none are
    /// completed, so that case is reported instead of clearing.
    pub async fn handle_clear_completed(&self) -> McpResult<String> {
        let mut app = self.lock_app()?;

        if !app.view().clear_completed_visible {
            return Ok("No completed items to clear".to_string());
        }

        let count = app.clear_completed().map_err(to_mcp_error)?;
        Ok(format!("Deleted {} completed item(s)", count))
    }
}

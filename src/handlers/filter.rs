//! Filter and history handlers for the to-do server

use crate::TodoServerHandler;
use crate::handlers::to_mcp_error;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Selects a filter by name and shows the resulting view.
    pub async fn handle_select_filter(&self, filter: String) -> McpResult<String> {
        let filter = validation::parse_filter_name(&filter).map_err(to_mcp_error)?;
        let mut app = self.lock_app()?;

        app.navigate(filter);
        Ok(app.view().render())
    }

    /// Goes to a location and shows the resulting view.
    pub async fn handle_navigate(&self, location: String) -> McpResult<String> {
        let mut app = self.lock_app()?;

        app.navigate_to(&location);
        Ok(app.view().render())
    }

    /// Steps back through the filter history.
    pub async fn handle_go_back(&self) -> McpResult<String> {
        let mut app = self.lock_app()?;

        match app.go_back() {
            Some(_) => Ok(app.view().render()),
            None => Ok(format!(
                "Already at the oldest history entry ({})",
                app.router().location()
            )),
        }
    }

    /// Steps forward through the filter history.
    pub async fn handle_go_forward(&self) -> McpResult<String> {
        let mut app = self.lock_app()?;

        match app.go_forward() {
            Some(_) => Ok(app.view().render()),
            None => Ok(format!(
                "Already at the newest history entry ({})",
                app.router().location()
            )),
        }
    }
}

//! To-do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! single-list to-do manager: add, edit, complete, filter and delete short
//! text items, with the list persisted after every change and the visible
//! subset selected by an addressable filter location with back/forward
//! history.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Maps MCP tool calls onto the engine
//! - **Domain Layer**: `todo`, `router`, `projection`, `app` - Item store,
//!   filter routing, derived view and the single mutation entry point
//! - **Persistence Layer**: `storage` module - Named JSON record in a
//!   key/value store (TOML file or in-memory)
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todos.toml", "todos-mcp", "#/")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod error;
mod handlers;
pub mod projection;
pub mod router;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::{Result, bail};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use app::TodoApp;
pub use error::{TodoError, TodoResult};
pub use projection::ViewProjection;
pub use router::{Filter, FilterRouter};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Storage};
pub use todo::{Counts, EditOutcome, Item, ItemId, ItemStore};

/// MCP Server handler for to-do management
///
/// Provides an MCP interface to the to-do engine. Each tool call stands in
/// for one UI control event. All changes are persisted before the call
/// returns.
pub struct TodoServerHandler {
    pub(crate) app: Mutex<TodoApp>,
}

impl TodoServerHandler {
    /// Create a new handler backed by a TOML file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the store file; created on first save
    /// * `key` - Name of the record holding the item list
    /// * `location` - Initial filter location, e.g. "#/active"
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::TodoServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::new("todos.toml", "todos-mcp", "#/")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, key: &str, location: &str) -> Result<Self> {
        if Path::new(storage_path).is_dir() {
            bail!("Storage path '{}' is a directory", storage_path);
        }
        if key.trim().is_empty() {
            bail!("Storage key must not be empty");
        }
        tracing::info!(path = storage_path, key, "opening to-do store");
        Ok(Self::with_storage(Storage::file(storage_path, key), location))
    }

    /// Create a handler over any storage
    pub fn with_storage(storage: Storage, location: &str) -> Self {
        Self {
            app: Mutex::new(TodoApp::open(storage, location)),
        }
    }

    /// Lock the application state for one tool call
    pub(crate) fn lock_app(&self) -> McpResult<MutexGuard<'_, TodoApp>> {
        self.app.lock().map_err(|_| {
            mcp_attr::Error::new(mcp_attr::ErrorCode::INTERNAL_ERROR)
                .with_message("To-do state is unavailable".to_string(), true)
        })
    }
}

/// Single-list to-do manager.
///
/// Items have an id (#1, #2, ...), a title and a completed flag, and are kept
/// in the order they were added. The list shown by `view` depends on the
/// selected filter: all, active (not completed) or completed. Filter changes
/// are recorded in a history that `go_back`/`go_forward` walk through.
///
/// Blank titles are never stored: adding one does nothing, editing an item to
/// a blank title deletes it. Titles are trimmed.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Append a new item to the end of the list. Blank titles are ignored.
    #[tool]
    async fn add_todo(
        &self,
        /// Title: what needs to be done
        title: String,
    ) -> McpResult<String> {
        self.handle_add(title).await
    }

    /// **Edit**: Replace an item's title. An empty title deletes the item.
    #[tool]
    async fn edit_todo(
        &self,
        /// ID of the item (e.g., "#1")
        id: String,
        /// New title
        title: String,
    ) -> McpResult<String> {
        self.handle_edit(id, title).await
    }

    /// **Toggle**: Mark an item completed, or active again if it was completed.
    #[tool]
    async fn toggle_todo(
        &self,
        /// ID of the item (e.g., "#1")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle(id).await
    }

    /// **Mark all**: Set every item to completed (true) or active (false).
    #[tool]
    async fn toggle_all(
        &self,
        /// true = mark all completed, false = mark all active
        completed: bool,
    ) -> McpResult<String> {
        self.handle_toggle_all(completed).await
    }

    /// **Delete**: Remove an item from the list.
    #[tool]
    async fn delete_todo(
        &self,
        /// ID of the item (e.g., "#1")
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }

    /// **Clear completed**: Remove every completed item. Does nothing when none are completed.
    #[tool]
    async fn clear_completed(&self) -> McpResult<String> {
        self.handle_clear_completed().await
    }

    /// **Filter**: Show all, active or completed items. Records a history entry when the filter changes.
    #[tool]
    async fn select_filter(
        &self,
        /// Filter: all/active/completed
        filter: String,
    ) -> McpResult<String> {
        self.handle_select_filter(filter).await
    }

    /// **Navigate**: Go to a filter location ("#/", "#/active", "#/completed"). Unknown locations show all items.
    #[tool]
    async fn navigate(
        &self,
        /// Location, e.g. "#/active"
        location: String,
    ) -> McpResult<String> {
        self.handle_navigate(location).await
    }

    /// **Back**: Return to the previously selected filter.
    #[tool]
    async fn go_back(&self) -> McpResult<String> {
        self.handle_go_back().await
    }

    /// **Forward**: Redo a filter change undone by go_back.
    #[tool]
    async fn go_forward(&self) -> McpResult<String> {
        self.handle_go_forward().await
    }

    /// **View**: Show the items under the current filter with the item counter and filter controls.
    #[tool]
    async fn view(&self) -> McpResult<String> {
        self.handle_view().await
    }
}

//! Common test utilities for integration tests
#![allow(dead_code)]

use todo_mcp::storage::{DEFAULT_KEY, KeyValueStore, PersistedItem};
use todo_mcp::{MemoryStore, Storage, TodoApp, TodoServerHandler};
use tempfile::NamedTempFile;

pub const TODO_ITEMS: [&str; 3] = [
    "buy some cheese",
    "feed the cat",
    "book a doctors appointment",
];

/// Create a test handler with temporary file storage
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = open_handler(&temp_file);
    (handler, temp_file)
}

/// Open a handler over an existing temporary file, as a restart would
pub fn open_handler(temp_file: &NamedTempFile) -> TodoServerHandler {
    TodoServerHandler::new(temp_file.path().to_str().unwrap(), DEFAULT_KEY, "#/").unwrap()
}

/// Create an app over an in-memory store, returning a clone of the store
pub fn memory_app() -> (TodoApp, MemoryStore) {
    let backend = MemoryStore::new();
    let app = TodoApp::new(Storage::new(backend.clone(), DEFAULT_KEY));
    (app, backend)
}

/// Add the three default items through the tool surface
pub async fn create_default_todos(handler: &TodoServerHandler) -> Vec<String> {
    let mut ids = Vec::new();
    for title in TODO_ITEMS {
        let response = handler.handle_add(title.to_string()).await.unwrap();
        ids.push(extract_id_from_response(&response));
    }
    ids
}

/// Extract item ID from handle_add() response message
/// Response format: "Item created with ID: <id> (<title>)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}

/// Titles of the items listed in a rendered view, in order
pub fn listed_titles(view: &str) -> Vec<String> {
    view.lines()
        .filter_map(|line| line.strip_prefix("- ["))
        .filter_map(|rest| rest.get(3..))
        .filter_map(|rest| rest.split_once(' ').map(|(_, title)| title.to_string()))
        .collect()
}

/// Decode the persisted record as a reader of the store would see it
pub fn persisted_items(backend: &impl KeyValueStore) -> Vec<PersistedItem> {
    match backend.get(DEFAULT_KEY).unwrap() {
        Some(raw) => serde_json::from_str(&raw).unwrap(),
        None => Vec::new(),
    }
}

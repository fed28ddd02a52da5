//! Durable storage of the item list
//!
//! The item sequence is persisted as a single named record in a key/value
//! store, the same shape a browser's local storage would hold: the value is a
//! JSON array of `{ "id", "title", "completed" }` objects in list order.

use crate::error::{TodoError, TodoResult};
use crate::todo::{Item, ItemId, ItemStore};
use crate::validation::normalize_title;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Default record name for the item list
pub const DEFAULT_KEY: &str = "todos-mcp";

/// A string key/value store
pub trait KeyValueStore: Send {
    /// Read an entry; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite an entry
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete an entry; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Key/value store backed by a TOML document on disk
///
/// Every top-level key is an entry name and every value a string. A missing
/// file reads as an empty store. Writes rewrite the whole document.
pub struct FileStore {
    file_path: PathBuf,
}

impl FileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    fn read_table(&self) -> Result<toml::Table> {
        if !self.file_path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(table)
    }

    fn write_table(&self, table: &toml::Table) -> Result<()> {
        let content = toml::to_string_pretty(table)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(anyhow!(
                "Entry '{}' is a {}, expected a string",
                key,
                other.type_str()
            )),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.write_table(&table)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut table = self.read_table()?;
        if table.remove(key).is_some() {
            self.write_table(&table)?;
        }
        Ok(())
    }
}

/// In-process key/value store
///
/// Clones share the same entries, so a clone kept by the caller observes
/// every write made through the store handed to [`Storage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Persisted shape of one item
///
/// `id` is optional on read so records written without ids still load; such
/// items are numbered after the highest saved id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Reads and writes the item list record
///
/// The list lives under `key`. The id counter lives under `<key>-next-id`,
/// written only when it cannot be derived from the list (after the newest
/// items were deleted).
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
    key: String,
    counter_key: String,
}

impl Storage {
    /// Storage over any key/value backend
    ///
    /// # Arguments
    /// * `backend` - Where the record lives
    /// * `key` - Record name
    pub fn new(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            backend: Box::new(backend),
            counter_key: format!("{}-next-id", key),
            key,
        }
    }

    /// Storage over a TOML file
    pub fn file(file_path: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self::new(FileStore::new(file_path), key)
    }

    /// Load the persisted item list
    ///
    /// Never fails: an absent, unreadable, malformed or empty record loads as
    /// an empty store. Records whose title is blank after trimming are
    /// skipped. Saved ids are kept; records without one, or repeating an id
    /// already seen, get fresh ids after the highest saved one.
    pub fn load(&self) -> ItemStore {
        let records = self.read_records();
        let total = records.len();

        let records: Vec<(Option<u64>, String, bool)> = records
            .into_iter()
            .filter_map(|record| {
                normalize_title(&record.title)
                    .map(|title| (record.id.filter(|id| *id > 0), title, record.completed))
            })
            .collect();
        if records.len() < total {
            tracing::warn!(
                key = %self.key,
                skipped = total - records.len(),
                "skipped persisted items with blank titles"
            );
        }

        let highest = records.iter().filter_map(|(id, _, _)| *id).max().unwrap_or(0);
        let mut next_id = self.read_counter().max(highest.saturating_add(1));
        let mut seen = HashSet::new();
        let mut renumbered = 0usize;
        let items: Vec<Item> = records
            .into_iter()
            .map(|(saved, title, completed)| {
                let id = match saved {
                    Some(id) if seen.insert(id) => id,
                    _ => {
                        renumbered += 1;
                        let id = next_id;
                        next_id = next_id.saturating_add(1);
                        id
                    }
                };
                let mut item = Item::new(ItemId::new(id), title);
                item.completed = completed;
                item
            })
            .collect();

        if renumbered > 0 {
            tracing::info!(key = %self.key, renumbered, "assigned ids to persisted items");
        }
        tracing::info!(key = %self.key, count = items.len(), "loaded items");
        ItemStore::with_items(items, next_id)
    }

    fn read_records(&self) -> Vec<PersistedItem> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted record, starting empty");
                return Vec::new();
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(key = %self.key, %error, "persisted record unreadable, starting empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "persisted record malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Saved counter value, 0 when absent or unusable
    fn read_counter(&self) -> u64 {
        match self.backend.get(&self.counter_key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(key = %self.counter_key, "ignoring malformed id counter");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(key = %self.counter_key, %error, "id counter unreadable");
                0
            }
        }
    }

    /// Overwrite the record with the store's items
    ///
    /// # Errors
    /// `TodoError::PersistenceUnavailable` if the record cannot be written
    pub fn save(&mut self, store: &ItemStore) -> TodoResult<()> {
        let records: Vec<PersistedItem> = store
            .items()
            .iter()
            .map(|item| PersistedItem {
                id: Some(item.id.value()),
                title: item.title.clone(),
                completed: item.completed,
            })
            .collect();

        let value = serde_json::to_string(&records)
            .map_err(|e| TodoError::PersistenceUnavailable(e.to_string()))?;
        self.backend
            .set(&self.key, &value)
            .map_err(|e| TodoError::PersistenceUnavailable(format!("{:#}", e)))?;

        let derived = records
            .iter()
            .filter_map(|record| record.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let counter = if store.next_id() > derived {
            self.backend.set(&self.counter_key, &store.next_id().to_string())
        } else {
            self.backend.remove(&self.counter_key)
        };
        counter.map_err(|e| TodoError::PersistenceUnavailable(format!("{:#}", e)))
    }
}

use crate::error::{TodoError, TodoResult};
use crate::todo::item::{Item, ItemId};
use crate::validation::normalize_title;

/// Summary counters over the whole store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Number of items
    pub total: usize,
    /// Items not yet completed
    pub active: usize,
    /// Completed items
    pub completed: usize,
}

/// What an edit did to the item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The title was replaced with the normalized text
    Renamed,
    /// The normalized text was empty, so the item was removed
    Removed(Item),
}

/// In-memory ordered collection of to-do items
///
/// The store owns every item. Insertion order is kept; new items go to the
/// end and only explicit deletion changes the relative order of the rest.
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Items in display order
    ///
    /// A Vec rather than a map: order is part of the model, and lookups by id
    /// over a personal to-do list are cheap linear scans.
    items: Vec<Item>,

    /// Next id to hand out; only ever increases
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding previously loaded items
    ///
    /// # Arguments
    /// * `items` - Items in display order
    /// * `next_id` - Saved counter value; raised past the highest id present
    ///   so loaded ids are never handed out again
    pub fn with_items(items: Vec<Item>, next_id: u64) -> Self {
        let after_highest = items
            .iter()
            .map(|i| i.id.value())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            items,
            next_id: next_id.max(after_highest),
        }
    }

    /// The id the next added item will get
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn generate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn position(&self, id: ItemId) -> TodoResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    fn find_mut(&mut self, id: ItemId) -> TodoResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// All items in order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item
    ///
    /// # Arguments
    /// * `raw_title` - Title as entered; trimmed before storage
    ///
    /// # Returns
    /// The new item's id, or `None` when the title is blank and nothing was added
    pub fn add(&mut self, raw_title: &str) -> Option<ItemId> {
        let title = normalize_title(raw_title)?;
        let id = self.generate_id();
        self.items.push(Item::new(id, title));
        Some(id)
    }

    /// Replace an item's title
    ///
    /// A title that is blank after trimming removes the item instead.
    ///
    /// # Errors
    /// `TodoError::NotFound` if no item has this id
    pub fn edit(&mut self, id: ItemId, raw_title: &str) -> TodoResult<EditOutcome> {
        match normalize_title(raw_title) {
            Some(title) => {
                self.find_mut(id)?.title = title;
                Ok(EditOutcome::Renamed)
            }
            None => self.remove(id).map(EditOutcome::Removed),
        }
    }

    /// Flip an item's completed flag
    ///
    /// # Returns
    /// The new value of the flag
    ///
    /// # Errors
    /// `TodoError::NotFound` if no item has this id
    pub fn toggle(&mut self, id: ItemId) -> TodoResult<bool> {
        let item = self.find_mut(id)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Set every item's completed flag to `value`
    ///
    /// # Returns
    /// How many items actually changed
    pub fn toggle_all(&mut self, value: bool) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|i| i.completed != value) {
            item.completed = value;
            changed += 1;
        }
        changed
    }

    /// Delete an item
    ///
    /// # Errors
    /// `TodoError::NotFound` if no item has this id
    pub fn remove(&mut self, id: ItemId) -> TodoResult<Item> {
        let pos = self.position(id)?;
        Ok(self.items.remove(pos))
    }

    /// Remove every completed item, keeping the order of the rest
    ///
    /// # Returns
    /// How many items were removed; 0 means nothing changed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(Item::is_active);
        before - self.items.len()
    }

    /// Count items in a single pass
    pub fn count(&self) -> Counts {
        let completed = self.items.iter().filter(|i| i.completed).count();
        let total = self.items.len();
        Counts {
            total,
            active: total - completed,
            completed,
        }
    }
}

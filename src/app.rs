//! Single mutation entry point tying the engine together
//!
//! [`TodoApp`] owns the item store, the filter router and the storage. Every
//! successful mutation runs in the same order: update the store, persist the
//! full list, recompute the projection, notify subscribers. A reader of the
//! persisted record after a call returns therefore always sees the
//! post-mutation list.

use crate::error::TodoResult;
use crate::projection::ViewProjection;
use crate::router::{Filter, FilterRouter};
use crate::storage::Storage;
use crate::todo::{Counts, EditOutcome, Item, ItemId, ItemStore};

type Subscriber = Box<dyn FnMut(&ViewProjection) + Send>;

/// The to-do application state
pub struct TodoApp {
    store: ItemStore,
    router: FilterRouter,
    storage: Storage,
    view: ViewProjection,
    subscribers: Vec<Subscriber>,
}

impl TodoApp {
    /// Load persisted items and start at the default location
    pub fn new(storage: Storage) -> Self {
        Self::open(storage, "")
    }

    /// Load persisted items and start at `location`
    ///
    /// # Arguments
    /// * `storage` - Where the item list is persisted
    /// * `location` - Initial location, e.g. "#/active"
    pub fn open(storage: Storage, location: &str) -> Self {
        let store = storage.load();
        let router = FilterRouter::from_location(location);
        let view = ViewProjection::compute(&store, router.current());
        Self {
            store,
            router,
            storage,
            view,
            subscribers: Vec::new(),
        }
    }

    /// All items in order
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    /// Look up an item
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Counters over the whole list
    pub fn count(&self) -> Counts {
        self.store.count()
    }

    /// The current projection
    pub fn view(&self) -> &ViewProjection {
        &self.view
    }

    /// Currently selected filter
    pub fn filter(&self) -> Filter {
        self.router.current()
    }

    pub fn router(&self) -> &FilterRouter {
        &self.router
    }

    /// Register a callback run with the fresh projection after every change
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewProjection) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add an item
    ///
    /// # Returns
    /// The new id, or `None` when the title was blank. A blank title changes
    /// nothing and writes nothing.
    ///
    /// # Errors
    /// `TodoError::PersistenceUnavailable` if the item was added but could
    /// not be saved
    pub fn add(&mut self, raw_title: &str) -> TodoResult<Option<ItemId>> {
        let Some(id) = self.store.add(raw_title) else {
            tracing::debug!("ignored blank title");
            return Ok(None);
        };
        tracing::debug!(%id, "added item");
        self.commit()?;
        Ok(Some(id))
    }

    /// Edit an item's title; a blank title deletes the item
    ///
    /// # Errors
    /// `TodoError::NotFound` for an unknown id, or
    /// `TodoError::PersistenceUnavailable` if the change could not be saved
    pub fn edit(&mut self, id: ItemId, raw_title: &str) -> TodoResult<EditOutcome> {
        let outcome = self.store.edit(id, raw_title)?;
        match outcome {
            EditOutcome::Renamed => tracing::debug!(%id, "renamed item"),
            EditOutcome::Removed(_) => tracing::debug!(%id, "removed item by blank edit"),
        }
        self.commit()?;
        Ok(outcome)
    }

    /// Flip an item's completed flag
    ///
    /// # Errors
    /// `TodoError::NotFound` for an unknown id, or
    /// `TodoError::PersistenceUnavailable` if the change could not be saved
    pub fn toggle(&mut self, id: ItemId) -> TodoResult<bool> {
        let completed = self.store.toggle(id)?;
        tracing::debug!(%id, completed, "toggled item");
        self.commit()?;
        Ok(completed)
    }

    /// Mark every item completed or active
    ///
    /// # Errors
    /// `TodoError::PersistenceUnavailable` if the change could not be saved
    pub fn toggle_all(&mut self, completed: bool) -> TodoResult<usize> {
        let changed = self.store.toggle_all(completed);
        tracing::debug!(completed, changed, "toggled all items");
        if changed > 0 {
            self.commit()?;
        }
        Ok(changed)
    }

    /// Delete an item
    ///
    /// # Errors
    /// `TodoError::NotFound` for an unknown id, or
    /// `TodoError::PersistenceUnavailable` if the change could not be saved
    pub fn remove(&mut self, id: ItemId) -> TodoResult<Item> {
        let item = self.store.remove(id)?;
        tracing::debug!(%id, "removed item");
        self.commit()?;
        Ok(item)
    }

    /// Delete every completed item
    ///
    /// # Returns
    /// How many items were deleted; 0 means nothing changed and nothing was
    /// written
    ///
    /// # Errors
    /// `TodoError::PersistenceUnavailable` if the change could not be saved
    pub fn clear_completed(&mut self) -> TodoResult<usize> {
        let removed = self.store.clear_completed();
        tracing::debug!(removed, "cleared completed items");
        if removed > 0 {
            self.commit()?;
        }
        Ok(removed)
    }

    /// Select a filter, pushing a history entry when it changes
    pub fn navigate(&mut self, filter: Filter) -> bool {
        let pushed = self.router.navigate(filter);
        if pushed {
            tracing::debug!(location = self.router.location(), "navigated");
            self.refresh();
        }
        pushed
    }

    /// Select the filter a location resolves to
    pub fn navigate_to(&mut self, location: &str) -> bool {
        self.navigate(crate::router::parse(location))
    }

    /// Step back through the filter history
    pub fn go_back(&mut self) -> Option<Filter> {
        let filter = self.router.go_back()?;
        tracing::debug!(location = self.router.location(), "went back");
        self.refresh();
        Some(filter)
    }

    /// Step forward through the filter history
    pub fn go_forward(&mut self) -> Option<Filter> {
        let filter = self.router.go_forward()?;
        tracing::debug!(location = self.router.location(), "went forward");
        self.refresh();
        Some(filter)
    }

    /// Persist, then recompute and notify
    ///
    /// The projection is recomputed even when saving fails: the in-memory
    /// list stays the source of truth.
    fn commit(&mut self) -> TodoResult<()> {
        let saved = self.storage.save(&self.store);
        if let Err(ref e) = saved {
            tracing::warn!(error = %e, "failed to persist items");
        }
        self.refresh();
        saved
    }

    fn refresh(&mut self) {
        self.view = ViewProjection::compute(&self.store, self.router.current());
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.view);
        }
    }
}

//! To-do domain models and the item store
//!
//! This module contains the item data model and its mutation operations.
//! It is split into submodules:
//! - `item`: the item record and its identifier
//! - `item_store`: ordered in-memory collection with add/edit/toggle/remove

mod item;
mod item_store;

// Re-export all public types
pub use item::{Item, ItemId};
pub use item_store::{Counts, EditOutcome, ItemStore};

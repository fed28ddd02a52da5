//! Derived view of the store for the selected filter
//!
//! A projection is computed from an [`ItemStore`] and the current [`Filter`]
//! and never mutates either. It also carries the plain-text rendering used
//! by the tool surface.

use crate::router::{Filter, location_for};
use crate::todo::{Counts, Item, ItemStore};

/// Text of the clear-completed control
pub const CLEAR_COMPLETED_LABEL: &str = "Clear completed";

/// Text of the mark-all control
pub const MARK_ALL_LABEL: &str = "Mark all as complete";

/// What the list currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProjection {
    /// Items matching the selected filter, in store order
    pub visible_items: Vec<Item>,
    /// Counters over the whole store, regardless of filter
    pub counts: Counts,
    /// "N item(s) left" footer text
    pub remaining_label: String,
    /// Whether the clear-completed control is shown
    pub clear_completed_visible: bool,
    /// Filter to highlight among the filter controls
    pub selected_filter: Filter,
    /// Whether the list section is shown
    pub main_visible: bool,
    /// Whether the footer is shown
    pub footer_visible: bool,
    /// Checked state of the mark-all control
    pub all_completed: bool,
}

impl ViewProjection {
    /// Derive the view for `filter`
    pub fn compute(store: &ItemStore, filter: Filter) -> Self {
        let counts = store.count();
        let visible_items = store
            .items()
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();

        Self {
            visible_items,
            counts,
            remaining_label: remaining_label(counts.active),
            clear_completed_visible: counts.completed > 0,
            selected_filter: filter,
            main_visible: counts.total > 0,
            footer_visible: counts.total > 0,
            all_completed: counts.total > 0 && counts.active == 0,
        }
    }

    /// Titles of the visible items, in order
    pub fn visible_titles(&self) -> Vec<&str> {
        self.visible_items.iter().map(Item::title).collect()
    }

    /// Render the view as plain text
    ///
    /// # Returns
    /// One line per visible item followed by the footer: counter, filter
    /// controls with the selected one bracketed, and the clear-completed
    /// control when it is shown.
    pub fn render(&self) -> String {
        if !self.main_visible {
            return "No items".to_string();
        }

        let mut result = format!(
            "Showing {} of {} item(s) ({}):\n",
            self.visible_items.len(),
            self.counts.total,
            location_for(self.selected_filter)
        );
        result.push_str(&format!(
            "[{}] {}\n\n",
            check_mark(self.all_completed),
            MARK_ALL_LABEL
        ));
        for item in &self.visible_items {
            let mark = check_mark(item.is_completed());
            result.push_str(&format!("- [{}] {} {}\n", mark, item.id(), item.title()));
        }

        if !self.footer_visible {
            return result;
        }

        result.push('\n');
        result.push_str(&self.remaining_label);

        let filters: Vec<String> = Filter::ALL
            .iter()
            .map(|f| {
                if *f == self.selected_filter {
                    format!("[{}]", f.label())
                } else {
                    f.label().to_string()
                }
            })
            .collect();
        result.push_str(&format!(" | {}", filters.join(" ")));

        if self.clear_completed_visible {
            result.push_str(&format!(" | {}", CLEAR_COMPLETED_LABEL));
        }
        result.push('\n');

        result
    }
}

fn check_mark(checked: bool) -> &'static str {
    if checked { "x" } else { " " }
}

/// Footer counter text, singular for exactly one item
pub fn remaining_label(active: usize) -> String {
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_store() -> ItemStore {
        let mut store = ItemStore::new();
        store.add("buy some cheese");
        let cat = store.add("feed the cat").unwrap();
        store.toggle(cat).unwrap();
        store
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 items left");
        assert_eq!(remaining_label(1), "1 item left");
        assert_eq!(remaining_label(3), "3 items left");
    }

    #[test]
    fn test_filters_select_visible_items() {
        let store = scenario_store();

        let active = ViewProjection::compute(&store, Filter::Active);
        assert_eq!(active.visible_titles(), vec!["buy some cheese"]);

        let completed = ViewProjection::compute(&store, Filter::Completed);
        assert_eq!(completed.visible_titles(), vec!["feed the cat"]);

        let all = ViewProjection::compute(&store, Filter::All);
        assert_eq!(all.visible_titles(), vec!["buy some cheese", "feed the cat"]);
    }

    #[test]
    fn test_counters_ignore_filter() {
        let store = scenario_store();
        let view = ViewProjection::compute(&store, Filter::Completed);
        assert_eq!(view.counts.total, 2);
        assert_eq!(view.remaining_label, "1 item left");
        assert!(view.clear_completed_visible);
        assert_eq!(view.selected_filter, Filter::Completed);
    }

    #[test]
    fn test_empty_store_hides_sections() {
        let view = ViewProjection::compute(&ItemStore::new(), Filter::All);
        assert!(!view.main_visible);
        assert!(!view.footer_visible);
        assert!(!view.clear_completed_visible);
        assert!(!view.all_completed);
        assert_eq!(view.render(), "No items");
    }

    #[test]
    fn test_all_completed() {
        let mut store = scenario_store();
        store.toggle_all(true);
        let view = ViewProjection::compute(&store, Filter::All);
        assert!(view.all_completed);
        assert_eq!(view.remaining_label, "0 items left");
        assert!(view.render().contains("[x] Mark all as complete\n"));
        assert!(view.render().contains("0 items left | [All] Active Completed"));
    }

    #[test]
    fn test_render() {
        let store = scenario_store();
        let rendered = ViewProjection::compute(&store, Filter::Active).render();
        assert!(rendered.starts_with("Showing 1 of 2 item(s) (#/active):\n"));
        assert!(rendered.contains("[ ] Mark all as complete\n"));
        assert!(rendered.contains("- [ ] #1 buy some cheese\n"));
        assert!(!rendered.contains("feed the cat"));
        assert!(rendered.contains("1 item left | All [Active] Completed | Clear completed"));
    }

    #[test]
    fn test_render_hides_clear_completed() {
        let mut store = ItemStore::new();
        store.add("buy some cheese");
        let rendered = ViewProjection::compute(&store, Filter::All).render();
        assert!(!rendered.contains(CLEAR_COMPLETED_LABEL));
        assert!(rendered.contains("[All] Active Completed"));
    }
}

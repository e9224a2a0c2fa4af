//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every backend
//! collection lives in a `Mirror`: the last confirmed snapshot plus any
//! staged (not yet confirmed) replacements.

use reactive_stores::Store;
use crate::models::{Document, Note, Record, Reminder, Stats, Task};

/// Local copy of a backend collection with two-phase updates.
///
/// Staged entries shadow canonical ones in `view()` until the server
/// confirms (`commit`) or the request fails (`rollback`).
#[derive(Clone, Debug)]
pub struct Mirror<T> {
    items: Vec<T>,
    staged: Vec<T>,
}

impl<T> Default for Mirror<T> {
    fn default() -> Self {
        Self { items: Vec::new(), staged: Vec::new() }
    }
}

impl<T: Record> Mirror<T> {
    /// Replace the whole snapshot with a fresh server listing
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.staged.clear();
    }

    /// Append an entity the server just created
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove by id; returns false (and changes nothing) if absent
    pub fn remove(&mut self, id: &str) -> bool {
        self.staged.retain(|s| s.id() != id);
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Stage a replacement for an existing entity; unknown ids are ignored
    pub fn stage(&mut self, item: T) -> bool {
        if self.get_canonical(item.id()).is_none() {
            return false;
        }
        self.staged.retain(|s| s.id() != item.id());
        self.staged.push(item);
        true
    }

    /// Promote the server-confirmed entity and drop its staged copy
    pub fn commit(&mut self, confirmed: T) {
        self.staged.retain(|s| s.id() != confirmed.id());
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == confirmed.id()) {
            *slot = confirmed;
        }
    }

    /// Discard the staged copy; the canonical entity is untouched
    pub fn rollback(&mut self, id: &str) {
        self.staged.retain(|s| s.id() != id);
    }

    pub fn is_staged(&self, id: &str) -> bool {
        self.staged.iter().any(|s| s.id() == id)
    }

    /// Canonical snapshot with staged replacements applied, in canonical order
    pub fn view(&self) -> Vec<T> {
        self.items
            .iter()
            .map(|item| {
                self.staged
                    .iter()
                    .find(|s| s.id() == item.id())
                    .unwrap_or(item)
                    .clone()
            })
            .collect()
    }

    /// Entity as currently displayed (staged copy if any)
    pub fn get(&self, id: &str) -> Option<T> {
        self.staged
            .iter()
            .find(|s| s.id() == id)
            .or_else(|| self.get_canonical(id))
            .cloned()
    }

    pub fn get_canonical(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.staged.clear();
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub tasks: Mirror<Task>,
    pub notes: Mirror<Note>,
    pub reminders: Mirror<Reminder>,
    /// DocIQ documents, including temporary `processing` placeholders
    pub documents: Mirror<Document>,
    /// Counters from the stats endpoint
    pub stats: Stats,
    /// Row count of the loaded dataset (None = nothing loaded)
    pub dataset_rows: Option<u64>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskFilter};

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            priority: Priority::Medium,
            completed: false,
            created: None,
        }
    }

    #[test]
    fn test_created_task_shows_with_priority() {
        let mut mirror = Mirror::default();
        let created = Task {
            priority: Priority::High,
            ..task("t1", "Buy milk")
        };
        mirror.push(created);

        let view = mirror.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Buy milk");
        assert_eq!(view[0].priority.as_str(), "high");
        assert!(!view[0].completed);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut mirror = Mirror::default();
        mirror.replace_all(vec![task("a", "A"), task("b", "B")]);

        assert!(!mirror.remove("zzz"));
        assert_eq!(mirror.len(), 2);
        assert!(mirror.remove("a"));
        assert_eq!(mirror.view().iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_staged_toggle_commit() {
        let mut mirror = Mirror::default();
        mirror.replace_all(vec![task("a", "A")]);

        let mut flipped = mirror.get("a").unwrap();
        flipped.completed = true;
        assert!(mirror.stage(flipped.clone()));

        assert!(mirror.view()[0].completed);
        assert!(!mirror.get_canonical("a").unwrap().completed);

        mirror.commit(flipped);
        assert!(!mirror.is_staged("a"));
        assert!(mirror.get_canonical("a").unwrap().completed);
    }

    #[test]
    fn test_staged_toggle_rollback() {
        let mut mirror = Mirror::default();
        mirror.replace_all(vec![task("a", "A")]);

        let mut flipped = mirror.get("a").unwrap();
        flipped.completed = true;
        mirror.stage(flipped);
        mirror.rollback("a");

        assert!(!mirror.view()[0].completed);
        assert!(!mirror.is_staged("a"));
    }

    #[test]
    fn test_stage_unknown_is_ignored() {
        let mut mirror: Mirror<Task> = Mirror::default();
        assert!(!mirror.stage(task("ghost", "G")));
        assert!(mirror.view().is_empty());
    }

    #[test]
    fn test_replace_all_drops_staged() {
        let mut mirror = Mirror::default();
        mirror.replace_all(vec![task("a", "A")]);
        let mut flipped = mirror.get("a").unwrap();
        flipped.completed = true;
        mirror.stage(flipped);

        mirror.replace_all(vec![task("a", "A"), task("b", "B")]);
        assert!(!mirror.is_staged("a"));
        assert_eq!(mirror.len(), 2);
    }

    #[test]
    fn test_filtered_view_partitions() {
        let mut mirror = Mirror::default();
        let mut done = task("b", "B");
        done.completed = true;
        mirror.replace_all(vec![task("a", "A"), done, task("c", "C")]);

        let view = mirror.view();
        let pending: Vec<_> = view.iter().filter(|t| TaskFilter::Pending.matches(t)).collect();
        let completed: Vec<_> = view.iter().filter(|t| TaskFilter::Completed.matches(t)).collect();
        assert_eq!(pending.len(), 2);
        assert_eq!(completed.len(), 1);
        assert_eq!(pending.len() + completed.len(), view.len());
    }
}

// In-memory todo list state: the single owner of items, filter, and theme

use crate::filter::FilterMode;
use crate::models::{TodoId, TodoItem};
use crate::theme::ThemeMode;
use tracing::debug;

/// Owner of all todo-list state.
///
/// One store instance holds the ordered item list plus the two pieces of view
/// state (active filter, theme). Every mutation goes through these methods;
/// event handlers receive the store by `&mut` reference rather than through
/// any shared global. All operations are synchronous and total: invalid input
/// (unknown id, empty text, out-of-bounds index) is a silent no-op, never an
/// error.
#[derive(Debug, Clone, Default)]
pub struct TodoListStore {
    items: Vec<TodoItem>,
    filter: FilterMode,
    theme: ThemeMode,
}

impl TodoListStore {
    /// Create an empty store with default view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given initial view state.
    pub fn with_view(filter: FilterMode, theme: ThemeMode) -> Self {
        TodoListStore {
            items: Vec::new(),
            filter,
            theme,
        }
    }

    // ========================================================================
    // Mutating operations (driven by event handlers)
    // ========================================================================

    /// Append a new item with the given text to the end of the list.
    ///
    /// Empty or whitespace-only text is rejected as a silent no-op. Returns
    /// the id of the new item, `None` if rejected. There is no upper bound on
    /// list size.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            debug!("add: rejected empty text");
            return None;
        }
        let item = TodoItem::new(text);
        let id = item.id;
        self.items.push(item);
        debug!(%id, count = self.items.len(), "add: appended item");
        Some(id)
    }

    /// Flip the completion flag on the item with the given id.
    ///
    /// Unknown ids are a silent no-op. Returns whether an item changed.
    /// Toggling twice restores the original value.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                debug!(%id, completed = item.completed, "toggle: flipped");
                true
            }
            None => {
                debug!(%id, "toggle: id not found");
                false
            }
        }
    }

    /// Remove the item with the given id.
    ///
    /// Unknown ids are a silent no-op. Returns whether an item was removed.
    /// The id of a removed item is never handed out again.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(%id, "delete: removed item");
        } else {
            debug!(%id, "delete: id not found");
        }
        removed
    }

    /// Remove every completed item, preserving the relative order of the
    /// remainder. Returns how many items were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        debug!(removed, "clear_completed");
        removed
    }

    /// Move the item at `from` so it ends up at position `to`, shifting the
    /// items in between.
    ///
    /// Out-of-bounds indices are a silent no-op returning `false`. Moving an
    /// index onto itself succeeds without touching the list.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            debug!(from, to, len = self.items.len(), "move_item: out of bounds");
            return false;
        }
        if from == to {
            return true;
        }
        let item = self.items.remove(from);
        let id = item.id;
        self.items.insert(to, item);
        debug!(%id, from, to, "move_item: reordered");
        true
    }

    // ========================================================================
    // Views (never mutate)
    // ========================================================================

    /// Lazy pass over the items satisfying `mode`, in list order.
    ///
    /// The sequence is restartable: every call walks the current list from
    /// the start. Nothing is cached or cloned.
    pub fn filtered_view(&self, mode: FilterMode) -> impl Iterator<Item = &TodoItem> + '_ {
        self.items.iter().filter(move |item| mode.matches(item))
    }

    /// `filtered_view` under the store's own active filter: what the page
    /// currently shows.
    pub fn visible_items(&self) -> impl Iterator<Item = &TodoItem> + '_ {
        self.filtered_view(self.filter)
    }

    /// Number of items not yet completed. Recomputed on every call.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    // ========================================================================
    // View state and lookups
    // ========================================================================

    /// Currently active filter.
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Set the active filter.
    pub fn set_filter(&mut self, mode: FilterMode) {
        debug!(?mode, "set_filter");
        self.filter = mode;
    }

    /// Current theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Set the theme.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        debug!(?mode, "set_theme");
        self.theme = mode;
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        debug!(theme = ?self.theme, "toggle_theme");
        self.theme
    }

    /// All items in list order, unfiltered.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The item with the given id, if present.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Zero-based position of the item with the given id.
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Total number of items, ignoring the filter.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

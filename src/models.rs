// Data models for the todo list

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a todo item.
///
/// Backed by a UUIDv7 so that rapid successive adds never collide and an id
/// is never reused after its item has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        TodoId(Uuid::now_v7())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task record: text plus completion flag.
///
/// Identity never changes after creation; toggling flips `completed` and
/// reordering changes position only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new item with a fresh id, not yet completed.
    pub fn new(text: impl Into<String>) -> Self {
        TodoItem {
            id: TodoId::new(),
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_item_starts_uncompleted() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<TodoId> = (0..100).map(|_| TodoId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_display_is_not_empty() {
        let id = TodoId::new();
        assert!(!id.to_string().is_empty());
    }

    #[test]
    fn test_todo_item_serialization() {
        let item = TodoItem::new("Walk dog");

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"text\":\"Walk dog\""));
        assert!(json.contains("\"completed\":false"));

        let deserialized: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, item);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = TodoId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}

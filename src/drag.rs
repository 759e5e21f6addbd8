// Drag-reorder gesture state: an id/index pair fed by hover ticks

use crate::models::TodoId;
use crate::store::TodoListStore;
use tracing::debug;

/// An in-flight drag gesture over one item.
///
/// Holds nothing beyond the dragged item's id and its last known position.
/// Each hover tick is an independent, idempotent move command: ticks may
/// arrive at high frequency and repeated targets are absorbed without
/// touching the list. Dropping the handle ends the gesture; there is no
/// other session state to clean up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragHandle {
    id: TodoId,
    index: usize,
}

impl DragHandle {
    /// Start dragging the item at a zero-based list position.
    ///
    /// Returns `None` if the position is out of bounds.
    pub fn grab(store: &TodoListStore, index: usize) -> Option<DragHandle> {
        let item = store.items().get(index)?;
        debug!(id = %item.id, index, "drag: grabbed");
        Some(DragHandle { id: item.id, index })
    }

    /// One hover tick: make the dragged item sit at `target`.
    ///
    /// Hovering the current position is a no-op, as is an out-of-bounds
    /// target. Returns `false` if the dragged item no longer exists, in
    /// which case the gesture is dead and the handle should be discarded.
    pub fn hover(&mut self, store: &mut TodoListStore, target: usize) -> bool {
        // Re-locate by id: identity survives every reorder, the index may not.
        let Some(current) = store.position(self.id) else {
            debug!(id = %self.id, "drag: item vanished, gesture dead");
            return false;
        };
        self.index = current;

        if target == self.index {
            return true;
        }
        if store.move_item(current, target) {
            self.index = target;
        }
        true
    }

    /// Id of the dragged item.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Last known zero-based position of the dragged item.
    pub fn index(&self) -> usize {
        self.index
    }
}

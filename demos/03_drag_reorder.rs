//! Example 03: Drag Reordering
//!
//! This example demonstrates the drag gesture: grab an item, hover it over
//! other positions one step at a time, and release it. The gesture tracks
//! the item by id, so it survives reorders happening underneath it.
//!
//! Run with: cargo run --example 03_drag_reorder

use eyre::Result;
use todostore::{DragHandle, TodoListStore};

fn order(store: &TodoListStore) -> Vec<&str> {
    store.items().iter().map(|item| item.text.as_str()).collect()
}

fn main() -> Result<()> {
    println!("TodoStore Drag Reordering Example");
    println!("=================================\n");

    let mut store = TodoListStore::new();
    store.add("Alpha");
    store.add("Bravo");
    store.add("Charlie");
    store.add("Delta");
    println!("Starting order: {:?}\n", order(&store));

    // MOVE: A direct reorder round-trip, no gesture involved
    println!("1. MOVE - move_item(0, 3) and back again...");
    store.move_item(0, 3);
    println!("   After move_item(0, 3): {:?}", order(&store));
    store.move_item(3, 0);
    println!("   After move_item(3, 0): {:?}\n", order(&store));

    // GRAB: Pick up the first item
    println!("2. GRAB - Picking up the item at index 0...");
    let Some(mut handle) = DragHandle::grab(&store, 0) else {
        // Four items were just added, index 0 is always there
        return Ok(());
    };
    println!("   Dragging item id {}\n", handle.id());

    // HOVER: Walk it down one slot at a time, like a pointer moving down
    println!("3. HOVER - Walking the item down the list...");
    for target in 1..=3 {
        handle.hover(&mut store, target);
        println!("   After hover over {}: {:?}", target, order(&store));
    }
    println!();

    // HOVER: Drag it back up one slot
    println!("4. HOVER - Dragging it back up one slot...");
    handle.hover(&mut store, 2);
    println!("   Order: {:?}\n", order(&store));

    // DROP: The order is already final when the item is released
    println!("5. DROP - Releasing the item...");
    println!("   The item rests at index {}.", handle.index());
    println!("   Final order: {:?}\n", order(&store));

    // LOST: A gesture dies when its item is deleted out from under it
    println!("6. LOST - Deleting a dragged item mid-gesture...");
    if let Some(mut lost) = DragHandle::grab(&store, 0) {
        store.delete(lost.id());
        let alive = lost.hover(&mut store, 1);
        println!("   Item deleted. Hover still works = {}\n", alive);
    }

    println!("Example complete!");
    Ok(())
}

//! Example 01: Basic Operations
//!
//! This example demonstrates the fundamental todo list operations: adding
//! items, toggling completion, deleting, and clearing completed items.
//!
//! Run with: cargo run --example 01_basic_ops

use eyre::Result;
use todostore::{TodoListStore, render_page};

fn main() -> Result<()> {
    println!("TodoStore Basic Operations Example");
    println!("==================================\n");

    let mut store = TodoListStore::new();

    // ADD: Append a few items
    println!("1. ADD - Appending three items...");
    store.add("Buy milk");
    store.add("Walk the dog");
    store.add("Write a letter");
    println!("   List holds {} items.\n", store.len());

    // Blank text is ignored
    println!("2. ADD - Trying blank text...");
    let accepted = store.add("   ");
    println!(
        "   Accepted = {}. List still holds {} items.\n",
        accepted.is_some(),
        store.len()
    );

    // TOGGLE: Complete the first item
    println!("3. TOGGLE - Completing the first item...");
    let milk = store.items()[0].id;
    store.toggle(milk);
    println!("   Items left: {}\n", store.active_count());

    // TOGGLE again: back to active
    println!("4. TOGGLE - Toggling the same item back...");
    store.toggle(milk);
    println!("   Items left: {}\n", store.active_count());

    // DELETE: Remove the second item
    println!("5. DELETE - Removing \"Walk the dog\"...");
    let dog = store.items()[1].id;
    let removed = store.delete(dog);
    println!("   Removed = {}. List holds {} items.\n", removed, store.len());

    // CLEAR: Complete one item, then sweep completed items away
    println!("6. CLEAR - Completing one item and clearing completed...");
    store.toggle(store.items()[1].id);
    let cleared = store.clear_completed();
    println!(
        "   Cleared {} item(s). List holds {} items.\n",
        cleared,
        store.len()
    );

    // RENDER: Show the page as the shell draws it
    println!("7. RENDER - The page as the shell draws it:");
    print!("{}", render_page(&store));

    println!("\nExample complete!");
    Ok(())
}

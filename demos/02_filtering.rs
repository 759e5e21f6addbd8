//! Example 02: Filtering
//!
//! This example demonstrates the three view filters. A filter only changes
//! which items are shown. The list itself keeps every item, in order.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use todostore::{FilterMode, TodoListStore, render_page};

fn main() -> Result<()> {
    println!("TodoStore Filtering Example");
    println!("===========================\n");

    let mut store = TodoListStore::new();
    store.add("Answer email");
    store.add("Book flights");
    store.add("Pack bags");
    store.add("Water plants");

    // Complete two of the four
    let book = store.items()[1].id;
    let water = store.items()[3].id;
    store.toggle(book);
    store.toggle(water);
    println!(
        "Four items, two of them completed. Items left: {}\n",
        store.active_count()
    );

    // VIEWS: Walk every mode without touching the page's own filter
    println!("1. VIEWS - Walking the three filter modes...");
    for mode in FilterMode::MODES {
        let texts: Vec<&str> = store
            .filtered_view(mode)
            .map(|item| item.text.as_str())
            .collect();
        println!("   {:<9} -> {:?}", mode.label(), texts);
    }
    println!();

    // CYCLE: Step the sticky filter the way the filter button does
    println!("2. CYCLE - Cycling the page filter...");
    for _ in 0..4 {
        println!("   Current filter: {}", store.filter());
        store.set_filter(store.filter().cycle());
    }
    println!();

    // RENDER: The page under the completed filter
    println!("3. RENDER - The page under the completed filter:");
    store.set_filter(FilterMode::Completed);
    print!("{}", render_page(&store));

    println!("\nExample complete!");
    Ok(())
}

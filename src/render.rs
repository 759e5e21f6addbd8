// Page rendering: the read-only view printed after every event

use crate::filter::FilterMode;
use crate::models::TodoItem;
use crate::store::TodoListStore;
use crate::theme::Palette;
use colored::Colorize;

/// Render the whole page for the store's current state.
///
/// Pure view over the store: mutates nothing, so rendering twice in a row
/// produces the same page. Rows show only the items passing the active
/// filter, but each row is labeled with the item's 1-based position in the
/// full list so the number typed at the prompt stays stable no matter which
/// filter is active.
pub fn render_page(store: &TodoListStore) -> String {
    let palette = store.theme().palette();
    let mut page = String::new();

    page.push('\n');
    page.push_str(&format!("  {}\n", "Todo".color(palette.header).bold()));

    let visible = store.visible_items().count();
    if visible == 0 {
        let notice = if store.is_empty() {
            "nothing to do"
        } else {
            "no items match this filter"
        };
        page.push_str(&format!("  {}\n", notice.color(palette.hint).italic()));
    } else {
        for (index, item) in store.items().iter().enumerate() {
            if !store.filter().matches(item) {
                continue;
            }
            page.push_str(&render_row(index + 1, item, &palette));
        }
    }

    let left = format!("{} items left", store.active_count());
    page.push_str(&format!(
        "\n  {}    {}\n  {}\n",
        left.color(palette.text),
        filter_row(store.filter(), &palette),
        "drag to reorder: grab / over / drop".color(palette.hint).italic(),
    ));

    page
}

fn render_row(position: usize, item: &TodoItem, palette: &Palette) -> String {
    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    let text = if item.completed {
        item.text.color(palette.done).strikethrough()
    } else {
        item.text.color(palette.text)
    };
    format!("{:>4}  {} {}\n", position, checkbox.color(palette.accent), text)
}

fn filter_row(active: FilterMode, palette: &Palette) -> String {
    FilterMode::MODES
        .iter()
        .map(|mode| {
            if *mode == active {
                mode.label().color(palette.accent).bold().to_string()
            } else {
                mode.label().color(palette.hint).to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("  ")
}

// TodoStore - A single-page todo list: items, filters, themes, drag reordering

pub mod drag;
pub mod filter;
pub mod models;
pub mod render;
pub mod shell;
pub mod store;
pub mod theme;

// Re-export main types for convenience
pub use drag::DragHandle;
pub use filter::FilterMode;
pub use models::{TodoId, TodoItem};
pub use render::render_page;
pub use shell::{Command, Session};
pub use store::TodoListStore;
pub use theme::{Palette, ThemeMode};

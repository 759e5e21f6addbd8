// Interactive shell: the presentation layer driving the store

use crate::drag::DragHandle;
use crate::filter::FilterMode;
use crate::models::TodoId;
use crate::render::render_page;
use crate::store::TodoListStore;
use crate::theme::ThemeMode;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  add <text>           append a new todo
  toggle <pos>         flip completion for the item at <pos>
  delete <pos>         remove the item at <pos>
  move <from> <to>     reorder: send item <from> to position <to>
  grab <pos>           pick an item up
  over <pos>           drag the picked-up item over a position
  drop                 put the dragged item down
  clear                remove all completed items
  filter [all|active|completed]
                       set the view filter; bare filter cycles
  theme [light|dark]   set the theme; bare theme toggles
  list                 redraw the page
  count                how many items are left
  export               print the list as JSON
  help                 this text
  quit                 leave; the list is not saved";

/// One user gesture, parsed from a prompt line.
///
/// Positions are the 1-based row numbers shown on the page, which are always
/// positions in the full list regardless of the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new item.
    Add(String),
    /// Flip completion on the item at a position.
    Toggle(usize),
    /// Remove the item at a position.
    Delete(usize),
    /// Move an item from one position to another.
    Move(usize, usize),
    /// Start dragging the item at a position.
    Grab(usize),
    /// Hover the dragged item over a position.
    Over(usize),
    /// End the drag gesture.
    Drop,
    /// Remove all completed items.
    Clear,
    /// Switch filter; `None` cycles to the next one.
    Filter(Option<FilterMode>),
    /// Switch theme; `None` toggles.
    Theme(Option<ThemeMode>),
    /// Redraw the page.
    List,
    /// Print the items-left count.
    Count,
    /// Print the list as JSON.
    Export,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parse one prompt line.
    ///
    /// `Ok(None)` for a blank line; `Err` carries a one-line usage hint for
    /// anything unrecognized.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                if rest.is_empty() {
                    return Err("usage: add <text>".to_string());
                }
                Command::Add(rest.to_string())
            }
            "toggle" | "t" => Command::Toggle(parse_position(rest, "toggle <pos>")?),
            "delete" | "del" => Command::Delete(parse_position(rest, "delete <pos>")?),
            "move" | "mv" => {
                let (from, to) = parse_positions(rest, "move <from> <to>")?;
                Command::Move(from, to)
            }
            "grab" => Command::Grab(parse_position(rest, "grab <pos>")?),
            "over" => Command::Over(parse_position(rest, "over <pos>")?),
            "drop" => Command::Drop,
            "clear" => Command::Clear,
            "filter" | "f" => {
                if rest.is_empty() {
                    Command::Filter(None)
                } else {
                    Command::Filter(Some(rest.parse()?))
                }
            }
            "theme" => {
                if rest.is_empty() {
                    Command::Theme(None)
                } else {
                    Command::Theme(Some(rest.parse()?))
                }
            }
            "list" | "ls" => Command::List,
            "count" => Command::Count,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {} (try help)", other)),
        };
        Ok(Some(command))
    }
}

fn parse_position(arg: &str, usage: &str) -> Result<usize, String> {
    let position: usize = arg.parse().map_err(|_| format!("usage: {}", usage))?;
    if position == 0 {
        return Err(format!("usage: {} (positions start at 1)", usage));
    }
    Ok(position)
}

fn parse_positions(args: &str, usage: &str) -> Result<(usize, usize), String> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => {
            Ok((parse_position(from, usage)?, parse_position(to, usage)?))
        }
        _ => Err(format!("usage: {}", usage)),
    }
}

/// What the prompt loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    /// Redraw the whole page.
    Page,
    /// Print a one-off line or block instead of the page.
    Text(String),
    /// End the session.
    Quit,
}

/// Interactive session owning the store.
///
/// This is the presentation layer: each input line maps onto one store
/// operation (or one step of the drag gesture), and the page is re-rendered
/// in full after every state-changing command, the way the original single
/// page re-renders on every state change. The store is threaded through the
/// handlers by `&mut`; the only other state is the in-flight drag handle.
pub struct Session {
    store: TodoListStore,
    drag: Option<DragHandle>,
}

impl Session {
    /// Create a session around an existing store.
    pub fn new(store: TodoListStore) -> Self {
        Session { store, drag: None }
    }

    /// Read-only view of the store, mainly for inspection after `run`.
    pub fn store(&self) -> &TodoListStore {
        &self.store
    }

    /// Run the prompt loop until `quit` or end of input.
    ///
    /// Renders the page once up front, then reads one command per line. The
    /// only failure paths are real I/O errors on the reader or writer; bad
    /// input never fails the loop.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        write!(output, "{}", render_page(&self.store)).context("failed to write page")?;
        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read command line")?;
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => match self.dispatch(command) {
                    Reply::Page => {
                        write!(output, "{}", render_page(&self.store))
                            .context("failed to write page")?;
                    }
                    Reply::Text(text) => {
                        writeln!(output, "{}", text).context("failed to write reply")?;
                    }
                    Reply::Quit => return Ok(()),
                },
                Err(hint) => {
                    writeln!(output, "{}", hint).context("failed to write hint")?;
                }
            }
            self.prompt(&mut output)?;
        }
        Ok(())
    }

    fn prompt(&self, output: &mut impl Write) -> Result<()> {
        write!(output, "> ").context("failed to write prompt")?;
        output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Apply one command to the store and decide what to print.
    fn dispatch(&mut self, command: Command) -> Reply {
        debug!(?command, "dispatch");
        match command {
            Command::Add(text) => {
                self.store.add(&text);
                Reply::Page
            }
            Command::Toggle(position) => {
                if let Some(id) = self.id_at(position) {
                    self.store.toggle(id);
                }
                Reply::Page
            }
            Command::Delete(position) => {
                if let Some(id) = self.id_at(position) {
                    self.store.delete(id);
                }
                Reply::Page
            }
            Command::Move(from, to) => {
                self.store.move_item(from - 1, to - 1);
                Reply::Page
            }
            Command::Grab(position) => match DragHandle::grab(&self.store, position - 1) {
                Some(handle) => {
                    self.drag = Some(handle);
                    Reply::Text(format!(
                        "dragging item {} (over <pos> to move, drop to finish)",
                        position
                    ))
                }
                None => Reply::Text("no item at that position".to_string()),
            },
            Command::Over(position) => match self.drag.as_mut() {
                Some(handle) => {
                    if handle.hover(&mut self.store, position - 1) {
                        Reply::Page
                    } else {
                        self.drag = None;
                        Reply::Text("the dragged item is gone".to_string())
                    }
                }
                None => Reply::Text("grab an item first (grab <pos>)".to_string()),
            },
            Command::Drop => {
                if self.drag.take().is_some() {
                    Reply::Page
                } else {
                    Reply::Text("nothing is being dragged".to_string())
                }
            }
            Command::Clear => {
                self.store.clear_completed();
                Reply::Page
            }
            Command::Filter(mode) => {
                let next = mode.unwrap_or_else(|| self.store.filter().cycle());
                self.store.set_filter(next);
                Reply::Page
            }
            Command::Theme(mode) => {
                match mode {
                    Some(theme) => self.store.set_theme(theme),
                    None => {
                        self.store.toggle_theme();
                    }
                }
                Reply::Page
            }
            Command::List => Reply::Page,
            Command::Count => Reply::Text(format!("{} items left", self.store.active_count())),
            Command::Export => match serde_json::to_string_pretty(self.store.items()) {
                Ok(json) => Reply::Text(json),
                Err(err) => {
                    warn!(error = ?err, "export: serialization failed");
                    Reply::Text("export failed".to_string())
                }
            },
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    /// Resolve a 1-based full-list position to the item's id.
    fn id_at(&self, position: usize) -> Option<TodoId> {
        self.store
            .items()
            .get(position.checked_sub(1)?)
            .map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        colored::control::set_override(false);
        let mut session = Session::new(TodoListStore::new());
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_covers_the_grammar() {
        assert_eq!(
            Command::parse("add Buy milk").unwrap(),
            Some(Command::Add("Buy milk".to_string()))
        );
        assert_eq!(Command::parse("toggle 2").unwrap(), Some(Command::Toggle(2)));
        assert_eq!(Command::parse("delete 1").unwrap(), Some(Command::Delete(1)));
        assert_eq!(Command::parse("move 1 3").unwrap(), Some(Command::Move(1, 3)));
        assert_eq!(Command::parse("grab 2").unwrap(), Some(Command::Grab(2)));
        assert_eq!(Command::parse("over 1").unwrap(), Some(Command::Over(1)));
        assert_eq!(Command::parse("drop").unwrap(), Some(Command::Drop));
        assert_eq!(Command::parse("clear").unwrap(), Some(Command::Clear));
        assert_eq!(Command::parse("filter").unwrap(), Some(Command::Filter(None)));
        assert_eq!(
            Command::parse("filter active").unwrap(),
            Some(Command::Filter(Some(FilterMode::Active)))
        );
        assert_eq!(Command::parse("theme").unwrap(), Some(Command::Theme(None)));
        assert_eq!(
            Command::parse("theme dark").unwrap(),
            Some(Command::Theme(Some(ThemeMode::Dark)))
        );
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("count").unwrap(), Some(Command::Count));
        assert_eq!(Command::parse("export").unwrap(), Some(Command::Export));
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!(
            Command::parse("a milk").unwrap(),
            Some(Command::Add("milk".to_string()))
        );
        assert_eq!(Command::parse("t 1").unwrap(), Some(Command::Toggle(1)));
        assert_eq!(Command::parse("del 1").unwrap(), Some(Command::Delete(1)));
        assert_eq!(Command::parse("mv 1 2").unwrap(), Some(Command::Move(1, 2)));
        assert_eq!(Command::parse("LS").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("Q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_blank_line_is_nothing() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input_with_hints() {
        assert!(Command::parse("frobnicate").unwrap_err().contains("unknown command"));
        assert!(Command::parse("add").unwrap_err().contains("usage: add"));
        assert!(Command::parse("toggle").unwrap_err().contains("usage: toggle"));
        assert!(Command::parse("toggle zero").unwrap_err().contains("usage: toggle"));
        assert!(Command::parse("toggle 0").unwrap_err().contains("positions start at 1"));
        assert!(Command::parse("move 1").unwrap_err().contains("usage: move"));
        assert!(Command::parse("move 1 2 3").unwrap_err().contains("usage: move"));
        assert!(Command::parse("filter weekly").unwrap_err().contains("unknown filter"));
        assert!(Command::parse("theme sepia").unwrap_err().contains("unknown theme"));
    }

    #[test]
    fn test_run_scripted_session() {
        let (session, output) =
            run_script("add Buy milk\nadd Walk dog\ntoggle 1\ncount\nfilter active\nexport\nquit\n");

        let store = session.store();
        assert_eq!(store.len(), 2);
        assert!(store.items()[0].completed);
        assert!(!store.items()[1].completed);
        assert_eq!(store.filter(), FilterMode::Active);
        assert!(output.contains("1 items left"));
        assert!(output.contains("[x] Buy milk"));
        // export ignores the filter and prints the whole list
        assert!(output.contains("\"text\": \"Buy milk\""));
        assert!(output.contains("\"text\": \"Walk dog\""));
    }

    #[test]
    fn test_run_positions_address_the_full_list_under_filter() {
        let (session, _) =
            run_script("add A\nadd B\nadd C\ntoggle 2\nfilter active\ntoggle 3\nquit\n");

        let store = session.store();
        assert_eq!(store.filter(), FilterMode::Active);
        assert!(!store.items()[0].completed);
        assert!(store.items()[1].completed);
        assert!(store.items()[2].completed);
    }

    #[test]
    fn test_run_drag_gesture_reorders() {
        let (session, output) = run_script("add A\nadd B\nadd C\ngrab 1\nover 3\ndrop\nquit\n");

        let order: Vec<&str> = session
            .store()
            .items()
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert!(output.contains("dragging item 1"));
    }

    #[test]
    fn test_run_drag_without_grab_prints_hint() {
        let (_, output) = run_script("add A\nover 1\ndrop\nquit\n");
        assert!(output.contains("grab an item first"));
        assert!(output.contains("nothing is being dragged"));
    }

    #[test]
    fn test_run_drag_dies_when_item_deleted() {
        let (session, output) = run_script("add A\nadd B\ngrab 1\ndelete 1\nover 2\nquit\n");
        assert_eq!(session.store().len(), 1);
        assert!(output.contains("the dragged item is gone"));
    }

    #[test]
    fn test_run_export_prints_json() {
        let (_, output) = run_script("add Buy milk\nexport\nquit\n");
        assert!(output.contains("\"text\": \"Buy milk\""));
        assert!(output.contains("\"completed\": false"));
    }

    #[test]
    fn test_run_theme_and_filter_commands() {
        let (session, _) = run_script("theme\nfilter\nfilter\nquit\n");
        assert_eq!(session.store().theme(), ThemeMode::Dark);
        assert_eq!(session.store().filter(), FilterMode::Completed);
    }

    #[test]
    fn test_run_unknown_command_prints_hint_and_continues() {
        let (session, output) = run_script("frobnicate\nadd A\nquit\n");
        assert!(output.contains("unknown command"));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_run_ends_cleanly_at_eof() {
        let (session, _) = run_script("add A\n");
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_run_help_lists_commands() {
        let (_, output) = run_script("help\nquit\n");
        assert!(output.contains("add <text>"));
        assert!(output.contains("move <from> <to>"));
        assert!(output.contains("export"));
    }

    #[test]
    fn test_silent_noops_keep_the_page_unchanged() {
        let (session, _) = run_script("add A\ntoggle 9\ndelete 9\nmove 1 9\nquit\n");
        let store = session.store();
        assert_eq!(store.len(), 1);
        assert!(!store.items()[0].completed);
    }
}

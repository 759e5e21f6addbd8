use clap::Parser;
use eyre::Result;
use std::io;
use todostore::{FilterMode, Session, ThemeMode, TodoListStore};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - A single-page todo list with filters, themes, and drag reordering")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Theme to start in: light or dark (default: light)
    #[arg(short, long, default_value_t = ThemeMode::Light)]
    theme: ThemeMode,

    /// Filter to start with: all, active, or completed (default: all)
    #[arg(short, long, default_value_t = FilterMode::All)]
    filter: FilterMode,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let store = TodoListStore::with_view(cli.filter, cli.theme);
    let mut session = Session::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gridlock::game::Board;
use gridlock::puzzle::Puzzle;
use gridlock::ui::App;

/// Play a sliding-car traffic puzzle in the terminal.
#[derive(Parser)]
#[command(name = "gridlock", about = "A terminal sliding-car traffic puzzle")]
struct Cli {
    /// Path to a puzzle JSON file mapping car letters to
    /// [length, [row, col], orientation] (0 = vertical, 1 = horizontal).
    /// Uses a built-in layout when omitted.
    puzzle: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let puzzle = match &cli.puzzle {
        Some(path) => {
            Puzzle::load(path).with_context(|| format!("loading puzzle from {}", path.display()))?
        }
        None => {
            eprintln!("No puzzle file given, using the built-in layout");
            Puzzle::builtin()
        }
    };
    let board = puzzle
        .build_board()
        .context("puzzle definition is not playable")?;

    let (solved, moves) = run_ui(board)?;
    if solved {
        println!("Solved in {} moves!", moves);
    }
    Ok(())
}

fn run_ui(board: Board) -> Result<(bool, usize)> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(board);
    let res = app.run(&mut terminal);

    // Restore terminal even when the loop errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok((app.solved(), app.moves()))
}

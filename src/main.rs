// hanoi-tui: step through the optimal Tower of Hanoi solution

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hanoi_tui::config::Cli;
use hanoi_tui::error::Result;
use hanoi_tui::logging;
use hanoi_tui::playback::{Playback, DEFAULT_INTERVAL};
use hanoi_tui::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_path();
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: {}", e);
    }

    let disks = cli.disk_count().get();
    tracing::info!(disks, "starting");
    let playback = Playback::new(disks);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback, DEFAULT_INTERVAL);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "terminal error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

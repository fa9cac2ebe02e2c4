// algostep: step-by-step algorithm visualizer for the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algostep::catalog::AlgorithmKind;
use algostep::config::Config;
use algostep::ui::App;

/// Log to a file only; the terminal belongs to the TUI
fn init_logging(config: &Config) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("ALGOSTEP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    if config.list {
        for kind in AlgorithmKind::ALL {
            println!("{:<16} {}", kind.cli_name(), kind.title());
        }
        return Ok(());
    }

    init_logging(&config)?;
    tracing::info!(?config, "starting");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
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

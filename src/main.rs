mod app;
mod container;
mod keymap;
mod sorted_vec;
mod traits;
mod ui;
mod util;

use std::{
    fs::File,
    io::{self, Stdout},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::{
    app::{load_config, store_config, App, Config},
    keymap::Command,
    util::Point,
};

/// A stack of colored swatches that keeps itself sorted.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    write_default_config: bool,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.write_default_config {
        store_config(io::stdout(), &Config::default())?;
        return Ok(());
    }
    if let Some(log) = &args.log {
        init_logging(log)?;
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    info!(?config, "starting");
    let mut app = App::new(&config);

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    loop {
        app.set_viewport(terminal.size()?);
        terminal.draw(|f| ui::ui(f, app))?;
        match event::read()? {
            Event::Key(key) => match keymap::command(key.code) {
                Some(Command::Quit) => return Ok(()),
                Some(command) => app.handle(command),
                None => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click(Point::new(column, row)),
            _ => {}
        }
    }
}

use std::fs::File;
use std::io::{self, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::config::{self, Config};

mod demo;

use demo::DemoApp;

/// Hover tooltip playground: move the mouse over the buttons
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to ~/.config/hovertip/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if args.print_config {
        print!("{}", config::render_config(&config)?);
        return Ok(());
    }

    init_logging(args.log_file.as_deref())?;

    let terminal = ratatui::init();
    with_teardown(
        || execute!(stdout(), EnableMouseCapture),
        || run(terminal, config),
        restore_terminal,
    )
}

/// Run `body` after `setup` succeeds; `teardown` runs on every path
fn with_teardown<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce(),
) -> Result<T> {
    let result = match setup() {
        Ok(()) => body(),
        Err(e) => Err(e.into()),
    };
    teardown();
    result
}

fn restore_terminal() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The terminal belongs to the UI, so logs only ever go to a file
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hovertip=debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    log::info!("Logging to {}", path.display());
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config: Config) -> Result<()> {
    let mut app = DemoApp::new(config.tooltip, Instant::now());

    loop {
        terminal.draw(|frame| demo::render(frame, &app))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(())
}

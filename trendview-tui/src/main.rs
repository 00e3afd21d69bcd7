//! TrendView: terminal dashboard over a synthetic price series.
//!
//! Tabs:
//! 1. Overview: headline cards and the price / moving-average chart
//! 2. Forecast: recent history joined to the monthly projection
//! 3. Watchlist: symbols to jump between
//! 4. Assistant: scripted Q&A about the current symbol
//! 5. Help: keyboard shortcuts

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trendview_core::config::DashboardConfig;
use trendview_tui::app::AppState;
use trendview_tui::{input, ui, DashboardController, RefreshTimer};

#[derive(Parser)]
#[command(name = "trendview", about = "Synthetic price dashboard in the terminal")]
struct Args {
    /// Config file (default: <config_dir>/trendview/config.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Symbol to open with, overriding the config
    #[arg(short, long)]
    symbol: Option<String>,

    /// Master seed for reproducible series, overriding the config
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::load_or_default(args.config.as_deref())?;
    if let Some(symbol) = args.symbol {
        config.dashboard.default_symbol = symbol;
    }
    if args.seed.is_some() {
        config.dashboard.seed = args.seed;
    }

    init_logging(&config.logging.file_or_default())?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let controller = DashboardController::from_config(&config)?;

    let (tick_tx, tick_rx) = mpsc::channel();
    let mut timer = RefreshTimer::new(Duration::from_secs(config.dashboard.refresh_secs), tick_tx);
    let mut app = AppState::new(controller, tick_rx);

    if timer.start()? {
        app.set_status(format!(
            "Auto-refresh every {}s. Press 5 for help.",
            config.dashboard.refresh_secs
        ));
    } else {
        app.set_status("Auto-refresh off. Press 5 for help.");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    timer.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("dashboard closed");
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    info!(log = %path.display(), "starting dashboard");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain refresh ticks (non-blocking)
        app.drain_ticks();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

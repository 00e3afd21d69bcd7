//! TrendView CLI: run pipeline stages and print the result.
//!
//! Commands:
//! - `generate`: synthetic daily series for a symbol
//! - `smooth`: the series with its trailing moving average
//! - `project`: monthly forecast points from a last price
//! - `snapshot`: everything the dashboard shows for one symbol, as JSON

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trendview_core::config::DashboardConfig;
use trendview_core::domain::normalize_symbol;
use trendview_core::rng::{SeedHierarchy, StdRandom};
use trendview_core::{generate, project, smooth, AnalyticsPipeline};

#[derive(Parser, Debug)]
#[command(
    name = "trendview-cli",
    about = "TrendView CLI: synthetic price series, smoothing and projection"
)]
struct Cli {
    /// Config file supplying default sizes and symbol.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Master seed. Without one, every run draws fresh entropy.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Last day of the series (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic daily price series.
    Generate {
        #[arg(long)]
        symbol: String,

        /// Number of daily points, today included.
        #[arg(long)]
        length: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Generate a series and attach its trailing moving average.
    Smooth {
        #[arg(long)]
        symbol: String,

        #[arg(long)]
        length: Option<usize>,

        /// Moving-average window in points.
        #[arg(long)]
        window: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Project monthly forecast points from a last price.
    Project {
        #[arg(long)]
        last_price: f64,

        /// Horizon in calendar months.
        #[arg(long)]
        horizon: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Run the full pipeline and print the snapshot as JSON.
    Snapshot {
        /// Defaults to the config's default symbol.
        #[arg(long)]
        symbol: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    let pipeline = &config.pipeline;
    let today = parse_today(cli.today.as_deref())?;

    match cli.command {
        Commands::Generate {
            symbol,
            length,
            format,
        } => {
            let symbol = normalize_symbol(&symbol).unwrap_or_default();
            let mut rng = rng_for(cli.seed, &symbol);
            let series = generate(&symbol, length.unwrap_or(pipeline.length), today, &mut rng)?;
            write_records(&series, format, out)
        }
        Commands::Smooth {
            symbol,
            length,
            window,
            format,
        } => {
            let symbol = normalize_symbol(&symbol).unwrap_or_default();
            let mut rng = rng_for(cli.seed, &symbol);
            let series = generate(&symbol, length.unwrap_or(pipeline.length), today, &mut rng)?;
            let smoothed = smooth(&series, window.unwrap_or(pipeline.window))?;
            write_records(&smoothed, format, out)
        }
        Commands::Project {
            last_price,
            horizon,
            format,
        } => {
            let mut rng = cli.seed.map_or_else(StdRandom::from_entropy, StdRandom::seeded);
            let points = project(
                last_price,
                horizon.unwrap_or(pipeline.horizon_months),
                today,
                &mut rng,
            )?;
            write_records(&points, format, out)
        }
        Commands::Snapshot { symbol } => {
            let symbol = symbol
                .as_deref()
                .and_then(normalize_symbol)
                .or_else(|| normalize_symbol(&config.dashboard.default_symbol))
                .unwrap_or_default();
            let mut rng = rng_for(cli.seed, &symbol);
            let snapshot = AnalyticsPipeline::from_config(pipeline)?.run(&symbol, today, &mut rng)?;
            info!(symbol = %snapshot.symbol, "snapshot written");
            serde_json::to_writer_pretty(&mut *out, &snapshot)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Seeded runs use the same per-symbol derivation as the dashboard, so
/// `--seed` here reproduces the dashboard's first series for that symbol.
fn rng_for(seed: Option<u64>, symbol: &str) -> StdRandom {
    match seed {
        Some(master) => SeedHierarchy::new(master).source_for(symbol, 0),
        None => StdRandom::from_entropy(),
    }
}

fn parse_today(raw: Option<&str>) -> Result<NaiveDate> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("bad --today date `{s}`"))
    })
    .transpose()
    .map(|date| date.unwrap_or_else(|| chrono::Local::now().date_naive()))
}

fn write_records<T: Serialize, W: Write>(records: &[T], format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

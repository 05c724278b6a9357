mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dayview_core::config::DayviewConfig;
use dayview_core::events_file::load_events;
use dayview_core::time_axis::check_viewport;
use dayview_core::{DayWindow, Event};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dayview")]
#[command(about = "Lay out a day's events on a calendar track without overlapping boxes")]
struct Cli {
    /// Log layout decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout of every event as JSON, keyed by event id
    Layout {
        #[command(flatten)]
        day: DayArgs,
    },
    /// Print each event with its box position
    Show {
        #[command(flatten)]
        day: DayArgs,
    },
    /// Show the config file location and the resolved day settings
    Config,
    /// Write a default config file, or save the given settings into it
    Init {
        #[command(flatten)]
        day: DayArgs,
    },
}

/// Overrides for the configured day settings.
#[derive(Args)]
pub struct DayArgs {
    /// JSON file with the day's events
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// First visible hour
    #[arg(long)]
    pub start_hour: Option<u32>,

    /// Hour the track ends at
    #[arg(long)]
    pub end_hour: Option<u32>,

    /// Height of the day track
    #[arg(long)]
    pub height: Option<f64>,
}

/// Everything a layout pass needs.
pub struct Day {
    pub events: Vec<Event>,
    pub window: DayWindow,
    pub viewport_height: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Layout { day } => commands::layout::run(resolve_day(day)?),
        Commands::Show { day } => commands::show::run(resolve_day(day)?),
        Commands::Config => commands::config::run(),
        Commands::Init { day } => commands::init::run(day),
    }
}

impl DayArgs {
    pub fn is_empty(&self) -> bool {
        self.events.is_none()
            && self.start_hour.is_none()
            && self.end_hour.is_none()
            && self.height.is_none()
    }
}

fn resolve_day(args: DayArgs) -> Result<Day> {
    let config = DayviewConfig::load()?;

    let window = DayWindow::new(
        args.start_hour.unwrap_or(config.start_hour),
        args.end_hour.unwrap_or(config.end_hour),
    )?;

    let viewport_height = check_viewport(args.height.unwrap_or(config.viewport_height))?;

    let Some(events_path) = args.events.or_else(|| config.events_path()) else {
        anyhow::bail!(
            "No events file given.\n\n\
            Pass one with:\n  \
            dayview show --events <file.json>\n\n\
            or set events_file in {}",
            DayviewConfig::config_path()?.display()
        );
    };

    let events = load_events(&events_path)?;
    tracing::debug!(path = %events_path.display(), events = events.len(), "loaded events");

    Ok(Day {
        events,
        window,
        viewport_height,
    })
}

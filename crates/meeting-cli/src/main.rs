//! `meetq` CLI — find meeting times in a day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve the request stored in a schedule document
//! meetq query -i schedule.json
//!
//! # Read the schedule from stdin, print JSON
//! cat schedule.json | meetq query --format json
//!
//! # Override the request: 45 minutes with alice, bob optional
//! meetq query -i schedule.json --duration 45 --attendee alice --optional bob
//!
//! # Show merged busy blocks for a group of people
//! meetq busy -i schedule.json --attendee alice --attendee bob
//!
//! # Same, written to a file as JSON
//! meetq busy -i schedule.json --attendee alice --format json -o busy.json
//!
//! # Debug logging (RUST_LOG takes precedence when set)
//! meetq --log-level debug query -i schedule.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::{busy_blocks, Schedule, TimeRange};
use std::collections::BTreeSet;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find meeting times in a day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List every window that can hold the requested meeting
    Query {
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Meeting length in minutes (overrides the document)
        #[arg(long)]
        duration: Option<u32>,
        /// Mandatory attendee, repeatable (replaces the document's list)
        #[arg(long = "attendee")]
        attendees: Vec<String>,
        /// Optional attendee, repeatable (replaces the document's list)
        #[arg(long = "optional")]
        optional: Vec<String>,
    },
    /// Show merged busy blocks for a set of people
    Busy {
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Person whose events count as busy, repeatable
        #[arg(long = "attendee", required = true)]
        attendees: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `[HH:MM, HH:MM)` range per line
    Text,
    /// Pretty-printed JSON array of `{start, end}` objects
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            duration,
            attendees,
            optional,
        } => {
            let mut schedule = read_schedule(input.as_deref())?;
            if let Some(duration) = duration {
                schedule.request.duration = duration;
            }
            if !attendees.is_empty() {
                schedule.request.attendees = attendees.into_iter().collect();
            }
            if !optional.is_empty() {
                schedule.request.optional_attendees = optional.into_iter().collect();
            }

            let windows = schedule.resolve();
            info!(windows = windows.len(), "query resolved");
            write_output(output.as_deref(), &render(&windows, format)?)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
            format,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let people: BTreeSet<String> = attendees.into_iter().collect();
            let blocks = busy_blocks(&people, &schedule.events);
            debug!(blocks = blocks.len(), "merged busy blocks");
            write_output(output.as_deref(), &render(&blocks, format)?)?;
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `--log-level`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("meeting_cli={log_level},meeting_engine={log_level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load a schedule document from `path`, or from stdin when no path is given.
fn read_schedule(path: Option<&str>) -> Result<Schedule> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {path}"))?,
        None => io::read_to_string(io::stdin()).context("Failed to read from stdin")?,
    };
    Schedule::from_json(&json).context("Failed to parse schedule document")
}

fn render(ranges: &[TimeRange], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(ranges.iter().map(|r| format!("{r}\n")).collect()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(ranges)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write rendered ranges to `path`, or to stdout when no path is given.
fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write file: {path}")),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

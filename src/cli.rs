use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use metric_calendar::YearSpan;

/// French Republican (Metric) calendar generator.
#[derive(Parser)]
#[command(
    name = "metric-calendar",
    version,
    about = "Convert Gregorian dates to the French Republican calendar and export iCalendar files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write an iCalendar file with one event per day.
    Generate(GenerateArgs),
    /// Print the Metric form of Gregorian dates.
    Convert(ConvertArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file [default: metric_calendar.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First Gregorian year to cover.
    #[arg(short, long, conflicts_with = "span")]
    pub start_year: Option<i32>,

    /// Number of Gregorian years to cover.
    #[arg(short = 'n', long, conflicts_with = "span")]
    pub years: Option<u16>,

    /// Years to cover as START/END or START+YEARS.
    #[arg(long)]
    pub span: Option<YearSpan>,

    /// Override output .ics path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Repeat every event yearly (RRULE:FREQ=YEARLY).
    #[arg(long)]
    pub recurring: bool,

    /// Count every date of Gregorian 2024 from 2023-09-22.
    #[arg(long)]
    pub legacy_2024_anchor: bool,

    /// Calendar display name.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian dates (YYYY-MM-DD).
    #[arg(required = true)]
    pub dates: Vec<NaiveDate>,

    /// Count every date of Gregorian 2024 from 2023-09-22.
    #[arg(long)]
    pub legacy_2024_anchor: bool,

    /// Print each result as JSON.
    #[arg(long)]
    pub json: bool,
}
